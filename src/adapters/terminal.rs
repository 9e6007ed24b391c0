use async_trait::async_trait;
use pawmap_core::gateways::{ConfirmationSurface, NoticeKind};
use std::{
    io::{self, Write as _},
    rc::Rc,
};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt as _, BufReader, Lines, Stdin},
    sync::Mutex,
};

/// Line based input shared by the command loop and the
/// confirmation prompts.
pub struct Console<R> {
    lines: Rc<Mutex<Lines<R>>>,
}

impl<R> Clone for Console<R> {
    fn clone(&self) -> Self {
        Self {
            lines: Rc::clone(&self.lines),
        }
    }
}

impl Console<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

impl<R> Console<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R) -> Self {
        Self {
            lines: Rc::new(Mutex::new(reader.lines())),
        }
    }

    /// Prints `prompt` and waits for the next line.
    ///
    /// Returns `None` at the end of input.
    pub async fn read_line(&self, prompt: &str) -> io::Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        print!("{prompt}");
        io::stdout().flush()?;
        lines.next_line().await
    }
}

#[async_trait(?Send)]
impl<R> ConfirmationSurface for Console<R>
where
    R: AsyncBufRead + Unpin,
{
    fn notify(&self, kind: NoticeKind, message: &str) {
        println!("[{kind}] {message}");
    }

    async fn confirm(&self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")).await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(err) => {
                log::warn!("Unable to read confirmation: {err}");
                false
            }
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

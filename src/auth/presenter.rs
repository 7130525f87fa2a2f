//! Presentation seam for user-facing messages. The flow reports failures and
//! confirmations through this trait; how they are rendered is up to the
//! embedding surface.

pub trait Presenter: Send + Sync {
    /// Surface a message to the user synchronously.
    fn present(&self, message: &str);
}

/// Renders messages on stderr, the CLI stand-in for a blocking alert.
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn present(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[cfg(test)]
pub mod testing {
    use super::Presenter;
    use std::sync::Mutex;

    /// Records presented messages for assertions.
    #[derive(Default)]
    pub struct RecordingPresenter {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingPresenter {
        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().expect("messages poisoned").clone()
        }
    }

    impl Presenter for RecordingPresenter {
        fn present(&self, message: &str) {
            self.messages
                .lock()
                .expect("messages poisoned")
                .push(message.to_string());
        }
    }
}

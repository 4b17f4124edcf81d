use std::io::Write;

/// Behaviour to surface text to the user.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
}

/// Writes to the error stream.
///
/// Help text is advisory: write failures are swallowed rather than surfaced.
#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        let _ = writeln!(std::io::stderr(), "{message}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::parser::interface::UserInterface;

    /// Collects printed lines for assertions.
    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        messages: RefCell<Vec<String>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.messages.borrow_mut().push(message);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume_message(self) -> String {
            self.messages.take().join("\n")
        }
    }

    /// Paired interface and handle: the parser keeps the interface, the test keeps the handle.
    pub(crate) fn buffered_interface() -> (BufferedInterface, MessageHandle) {
        let buffer = Rc::new(RefCell::new(Vec::default()));
        (
            BufferedInterface {
                buffer: Rc::clone(&buffer),
            },
            MessageHandle { buffer },
        )
    }

    pub(crate) struct BufferedInterface {
        buffer: Rc<RefCell<Vec<String>>>,
    }

    impl UserInterface for BufferedInterface {
        fn print(&self, message: String) {
            self.buffer.borrow_mut().push(message);
        }
    }

    pub(crate) struct MessageHandle {
        buffer: Rc<RefCell<Vec<String>>>,
    }

    impl MessageHandle {
        pub(crate) fn consume_message(self) -> String {
            let lines = self.buffer.take();
            assert!(!lines.is_empty(), "nothing was printed");
            lines.join("\n")
        }
    }
}

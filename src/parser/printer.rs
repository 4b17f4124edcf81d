use terminal_size::{terminal_size, Width};

use crate::matcher::OptionEntry;
use crate::parser::interface::UserInterface;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
const COLUMN_GAP: &str = "  ";

/// Renders the help listing.
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    /// A printer wrapping against the attached terminal, when there is one.
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self { terminal_width }
    }

    #[cfg(test)]
    pub(crate) fn fixed(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Render the help listing through the interface.
    ///
    /// Best-effort: the interface swallows write failures, so a broken stream can never crash
    /// the caller.
    pub(crate) fn print_help(
        &self,
        program: &str,
        about: Option<&str>,
        entries: &[OptionEntry],
        user_interface: &dyn UserInterface,
    ) {
        user_interface.print(format!("usage: {program} [options]"));

        if let Some(about) = about {
            user_interface.print(about.to_string());
        }

        user_interface.print("Options:".to_string());

        for entry in entries {
            let names = entry.names();

            match &entry.help {
                Some(help) => {
                    let prefix = format!("{COLUMN_GAP}{names}{COLUMN_GAP}");

                    for line in layout(&prefix, help, self.terminal_width) {
                        user_interface.print(line);
                    }
                }
                None => user_interface.print(format!("{COLUMN_GAP}{names}")),
            }
        }
    }
}

/// Lay the description out after the prefix, wrapping against the terminal width when it leaves a
/// usable column.
fn layout(prefix: &str, description: &str, terminal_width: Option<usize>) -> Vec<String> {
    let width = match terminal_width {
        Some(terminal_width)
            if terminal_width >= prefix.len() + MINIMUM_DESCRIPTION_WIDTH =>
        {
            terminal_width - prefix.len()
        }
        _ => return vec![format!("{prefix}{description}")],
    };

    let parts = chunk(description, width);

    if parts.is_empty() {
        return vec![prefix.trim_end().to_string()];
    }

    let indent = " ".repeat(prefix.len());
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                format!("{prefix}{part}")
            } else {
                format!("{indent}{part}")
            }
        })
        .collect()
}

/// Split a paragraph into width-bounded lines on word boundaries.
/// A single word longer than the width overflows its own line.
fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

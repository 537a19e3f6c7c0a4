use std::io::{BufRead, StdinLock, Stdout, Write, stdin, stdout};

/// Line-oriented console over any input/output stream pair.
///
/// Reads resolve to `Ok(None)` once the input stream ends, so callers decide
/// whether end of input is a clean stop or an error.
pub struct Console<R, W> {
    input: R,
    output: W,
}

pub fn stdio() -> Console<StdinLock<'static>, Stdout> {
    Console::new(stdin().lock(), stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` with no trailing newline, then read one line.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, anyhow::Error> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn read_line(&mut self) -> Result<Option<String>, anyhow::Error> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    pub fn print_line(&mut self, text: &str) -> Result<(), anyhow::Error> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

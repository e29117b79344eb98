/// Receives rendered output one line at a time, in order.
pub trait LineSink {
    fn emit(&mut self, line: String);
}

/// Writes every line to standard output
#[derive(Debug, Default)]
pub struct Stdout;

impl LineSink for Stdout {
    fn emit(&mut self, line: String) {
        println!("{line}");
    }
}

/// Collects lines in memory
impl LineSink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

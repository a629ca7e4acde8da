use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Failed outcome that is still a normal result (stdout)
    pub fn failure(&self, message: &str) {
        println!("{} {}", style("✗").red(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn hint(&self, message: &str) {
        println!("{} {}", style("👉").cyan(), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

use affirm::Reporter;

/// Recording reporter double: keeps every failure message and counts helper
/// marks so tests can check attribution behavior.
#[derive(Debug, Default)]
pub struct Recorder {
    pub helper_marks: usize,
    pub failures: Vec<String>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Reporter for Recorder {
    fn mark_helper(&mut self) {
        self.helper_marks += 1;
    }

    fn report_failure(&mut self, message: String) {
        self.failures.push(message);
    }
}

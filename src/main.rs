use logger::{
    console::Term,
    severity::Severity,
    LogSink, OpenBehavior, DEFAULT_LOG_FILE,
};

fn main() {
    let mut sink = LogSink::open(Term::new(), DEFAULT_LOG_FILE, OpenBehavior::Reuse);

    sink.log("This is an info message!", Severity::Info);
    sink.log("This is a warning message!", Severity::Warning);
    sink.log("This is an error message!", Severity::Error);
    sink.log("This is a fatal message!", Severity::Fatal);
    sink.log("A successful action has been performed!", Severity::Success);

    sink.log_to_file("Session started", Severity::Info, true);
    sink.log_to_file("Build artifacts written to disk", Severity::Success, true);

    sink.log("Replaying the persisted log:", Severity::Info);
    if let Err(e) = sink.replay() {
        sink.log(&format!("replay failed: {}", e), Severity::Error);
    }
}

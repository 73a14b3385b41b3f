//! End-to-end tests of the three classic entry points against a fake host.

use std::sync::Mutex;

use ember_compat::{
    codes, emit, print_formatted, raise, report, write, ArgPack, CallSite, ErrorSink, FrameStack,
    HostContext, OutputSink, Severity, SinkError,
};

/// Error sink that records everything it is asked to deliver.
#[derive(Default)]
struct RecordingErrorSink {
    raised: Mutex<Vec<(Severity, String, String)>>,
    fail_with: Option<String>,
}

impl RecordingErrorSink {
    fn failing(reason: &str) -> Self {
        Self {
            raised: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    fn raised(&self) -> Vec<(Severity, String, String)> {
        self.raised.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn raise(
        &self,
        severity: Severity,
        site_prefix: &str,
        message: ArgPack<'_>,
    ) -> Result<(), SinkError> {
        if let Some(reason) = &self.fail_with {
            return Err(SinkError::Report(reason.clone()));
        }
        let body = String::from_utf8(message.render()).unwrap();
        self.raised
            .lock()
            .unwrap()
            .push((severity, site_prefix.to_string(), body));
        Ok(())
    }
}

/// Output sink that records every buffer it accepts.
#[derive(Default)]
struct RecordingOutputSink {
    written: Mutex<Vec<Vec<u8>>>,
    fail_with: Option<String>,
}

impl RecordingOutputSink {
    fn failing(reason: &str) -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    fn written(&self) -> Vec<Vec<u8>> {
        self.written.lock().unwrap().clone()
    }
}

impl OutputSink for RecordingOutputSink {
    fn write_bytes(&self, buf: &[u8]) -> Result<(), SinkError> {
        if let Some(reason) = &self.fail_with {
            return Err(SinkError::Write {
                len: buf.len(),
                reason: reason.clone(),
            });
        }
        self.written.lock().unwrap().push(buf.to_vec());
        Ok(())
    }
}

struct FakeHost {
    frames: FrameStack,
    errors: RecordingErrorSink,
    output: RecordingOutputSink,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            frames: FrameStack::new(),
            errors: RecordingErrorSink::default(),
            output: RecordingOutputSink::default(),
        }
    }

    fn context(&self) -> HostContext<'_> {
        HostContext {
            frames: &self.frames,
            errors: &self.errors,
            output: &self.output,
        }
    }
}

#[test]
fn test_report_qualifies_message_with_active_method() {
    let host = FakeHost::new();
    let _frame = host.frames.enter(CallSite::method("Foo", "::", "bar"));

    raise!(&host.context(), codes::WARNING, "bad arg").unwrap();

    let raised = host.errors.raised();
    assert_eq!(raised.len(), 1);
    let (severity, prefix, body) = &raised[0];
    assert_eq!(*severity, Severity::Warning);
    assert_eq!(prefix, "Foo::bar(): ");
    assert_eq!(body, "bad arg");
    assert_eq!(format!("{prefix}{body}"), "Foo::bar(): bad arg");
}

#[test]
fn test_report_without_class_drops_the_separator() {
    let host = FakeHost::new();
    let _frame = host.frames.enter(CallSite::function("strlen"));

    raise!(&host.context(), codes::NOTICE, "expects {} arguments", 1).unwrap();

    let raised = host.errors.raised();
    assert_eq!(raised[0].0, Severity::Notice);
    assert_eq!(raised[0].1, "strlen(): ");
    assert_eq!(raised[0].2, "expects 1 arguments");
}

#[test]
fn test_report_with_idle_stack_degrades_to_empty_prefix() {
    let host = FakeHost::new();

    raise!(&host.context(), codes::DEPRECATED, "").unwrap();

    let raised = host.errors.raised();
    assert_eq!(raised[0].0, Severity::Deprecated);
    assert_eq!(format!("{}{}", raised[0].1, raised[0].2), "(): ");
}

#[test]
fn test_report_maps_every_classic_code_the_same_way_each_time() {
    let host = FakeHost::new();
    let ctx = host.context();

    for code in codes::ALL {
        report(&ctx, code, ArgPack::new(format_args!("once"))).unwrap();
        report(&ctx, code, ArgPack::new(format_args!("twice"))).unwrap();
    }

    let raised = host.errors.raised();
    assert_eq!(raised.len(), 2 * codes::ALL.len());
    for pair in raised.chunks(2) {
        assert_eq!(pair[0].0, pair[1].0);
    }
}

#[test]
fn test_report_propagates_sink_failure_unchanged() {
    let host = FakeHost {
        frames: FrameStack::new(),
        errors: RecordingErrorSink::failing("engine is shutting down"),
        output: RecordingOutputSink::default(),
    };

    let err = raise!(&host.context(), codes::FATAL, "too late").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error sink failed to deliver diagnostic: engine is shutting down"
    );
}

#[test]
fn test_write_forwards_bytes_unmodified_and_returns_the_count() {
    let host = FakeHost::new();
    let payload = b"<html>\x00\xffraw bytes</html>";

    let written = write(&host.context(), payload).unwrap();

    assert_eq!(written, payload.len() as i32);
    assert_eq!(host.output.written(), vec![payload.to_vec()]);
}

#[test]
fn test_write_of_empty_buffer_returns_zero() {
    let host = FakeHost::new();
    assert_eq!(write(&host.context(), b"").unwrap(), 0);
    assert_eq!(host.output.written(), vec![Vec::new()]);
}

#[test]
fn test_print_formatted_renders_then_writes_exact_length() {
    let host = FakeHost::new();

    let written = emit!(&host.context(), "{} items", 5).unwrap();

    assert_eq!(written, 7);
    assert_eq!(host.output.written(), vec![b"5 items".to_vec()]);
}

#[test]
fn test_print_formatted_propagates_write_failure_unchanged() {
    let host = FakeHost {
        frames: FrameStack::new(),
        errors: RecordingErrorSink::default(),
        output: RecordingOutputSink::failing("broken pipe"),
    };

    let err = print_formatted(&host.context(), ArgPack::new(format_args!("{} items", 5)))
        .unwrap_err();

    match err {
        SinkError::Write { len, reason } => {
            assert_eq!(len, 7);
            assert_eq!(reason, "broken pipe");
        }
        other => panic!("unexpected error variant: {other}"),
    }
}

#[test]
fn test_operations_are_independent_of_each_other() {
    let host = FakeHost::new();
    let ctx = host.context();
    let _frame = host.frames.enter(CallSite::method("Db", "::", "query"));

    emit!(&ctx, "row {}", 1).unwrap();
    raise!(&ctx, codes::USER_WARNING, "slow query").unwrap();
    emit!(&ctx, "row {}", 2).unwrap();

    assert_eq!(
        host.output.written(),
        vec![b"row 1".to_vec(), b"row 2".to_vec()]
    );
    let raised = host.errors.raised();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].1, "Db::query(): ");
}

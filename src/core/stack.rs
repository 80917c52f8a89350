//! Call stack introspection
//!
//! Records name the function that created them (`action`) and fatal records
//! carry a rendered backtrace. Both go through [`StackWalker`] so the
//! unwinder can be swapped for a deterministic stand-in.

/// Name reported when a frame cannot be resolved or the stack runs out.
pub const UNKNOWN_FRAME: &str = "unknown";

/// Capability for walking the current call stack.
pub trait StackWalker: Send + Sync {
    /// Fully qualified name of the function `skip` frames above the caller.
    ///
    /// `skip = 0` names the function that called `caller_name`.
    fn caller_name(&self, skip: usize) -> String;

    /// One `file:line function()` descriptor per frame, innermost first,
    /// beginning with the function that called `frames`.
    fn frames(&self) -> Vec<String>;
}

/// Resolved frame, one per logical (possibly inlined) function.
#[derive(Debug, Clone)]
struct Frame {
    name: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    fn describe(&self) -> String {
        format!(
            "{}:{} {}()",
            self.file.as_deref().unwrap_or("<unknown>"),
            self.line.unwrap_or(0),
            self.name
        )
    }
}

/// Walker backed by the platform unwinder through the `backtrace` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktraceWalker;

impl BacktraceWalker {
    pub const fn new() -> Self {
        Self
    }

    /// Walk until the unwinder reports the end, then drop the leading frames
    /// that belong to the unwinder and to this module.
    #[inline(never)]
    fn collect() -> Vec<Frame> {
        let mut frames = Vec::new();
        backtrace::trace(|raw| {
            let before = frames.len();
            backtrace::resolve_frame(raw, |symbol| {
                frames.push(Frame {
                    name: symbol
                        .name()
                        .map(|name| format!("{:#}", name))
                        .unwrap_or_else(|| UNKNOWN_FRAME.to_string()),
                    file: symbol.filename().map(|path| path.display().to_string()),
                    line: symbol.lineno(),
                });
            });
            if frames.len() == before {
                frames.push(Frame {
                    name: UNKNOWN_FRAME.to_string(),
                    file: None,
                    line: None,
                });
            }
            true
        });

        let internal = frames
            .iter()
            .take_while(|frame| is_internal(&frame.name))
            .count();
        frames.drain(..internal);
        frames
    }
}

fn is_internal(name: &str) -> bool {
    name.starts_with("backtrace::")
        || name.starts_with("<backtrace::")
        || name.contains(concat!(module_path!(), "::BacktraceWalker"))
}

impl StackWalker for BacktraceWalker {
    #[inline(never)]
    fn caller_name(&self, skip: usize) -> String {
        Self::collect()
            .into_iter()
            .nth(skip)
            .map(|frame| frame.name)
            .unwrap_or_else(|| UNKNOWN_FRAME.to_string())
    }

    #[inline(never)]
    fn frames(&self) -> Vec<String> {
        Self::collect().iter().map(Frame::describe).collect()
    }
}

/// Walker that reports nothing, for environments without unwind info and
/// for deterministic tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWalker;

impl StackWalker for NoopWalker {
    fn caller_name(&self, _skip: usize) -> String {
        UNKNOWN_FRAME.to_string()
    }

    fn frames(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Name of the function `skip` frames above the caller of this function.
#[inline(never)]
pub fn capture_caller_name(skip: usize) -> String {
    // One extra frame for this wrapper
    BacktraceWalker.caller_name(skip + 1)
}

/// Backtrace of the caller, innermost frame first.
#[inline(never)]
pub fn capture_stack_trace() -> Vec<String> {
    let mut frames = BacktraceWalker.frames();
    // Drop this wrapper's own frame
    if !frames.is_empty() {
        frames.remove(0);
    }
    frames
}

/// Indentation added per nesting level.
pub const INDENT_UNIT: &str = "    ";

/// One `for` loop of a nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopLevel {
    /// Loop variable name.
    pub index: String,
    /// Inclusive lower bound, as source text.
    pub lower: String,
    /// Exclusive upper bound, as source text.
    pub upper: String,
    /// Increment, as source text; `"1"` renders as `++`.
    pub increment: String,
    /// Annotation line emitted just above the loop, e.g. an OpenMP pragma.
    pub pragma: Option<String>,
}

impl LoopLevel {
    /// Unit-stride loop `index` over `lower..upper` with no annotation.
    pub fn new(index: impl Into<String>, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            lower: lower.into(),
            upper: upper.into(),
            increment: "1".into(),
            pragma: None,
        }
    }

    /// Sets the increment text.
    pub fn step(mut self, increment: impl Into<String>) -> Self {
        self.increment = increment.into();
        self
    }

    /// Sets the annotation line; an empty string clears it.
    pub fn parallel(mut self, pragma: impl Into<String>) -> Self {
        let pragma = pragma.into();
        self.pragma = (!pragma.is_empty()).then_some(pragma);
        self
    }

    /// The loop statement without indentation or brace,
    /// e.g. `for(int i0=0; i0<Nx0; i0++)`.
    pub fn statement(&self) -> String {
        let step = if self.increment == "1" {
            "++".to_string()
        } else {
            format!("+={}", self.increment)
        };
        format!(
            "for(int {var}={lower}; {var}<{upper}; {var}{step})",
            var = self.index,
            lower = self.lower,
            upper = self.upper,
        )
    }

    /// Opening text at `depth` levels of indentation: the optional annotation
    /// line followed by the loop line ending in ` {`.
    pub fn opening(&self, depth: usize) -> String {
        let prefix = INDENT_UNIT.repeat(depth);
        let mut text = String::new();
        if let Some(pragma) = self.pragma.as_deref().filter(|p| !p.is_empty()) {
            text.push_str(&prefix);
            text.push_str(pragma);
            text.push('\n');
        }
        text.push_str(&prefix);
        text.push_str(&self.statement());
        text.push_str(" {\n");
        text
    }

    /// Closing brace at `depth` levels of indentation, tagged with the loop it ends.
    pub fn closing(&self, depth: usize) -> String {
        format!("{}}} // END LOOP: {}\n", INDENT_UNIT.repeat(depth), self.statement())
    }
}

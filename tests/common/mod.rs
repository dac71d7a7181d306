use line_clamp::{FragmentHandle, FragmentStyle, HostElement, MeasurementProvider, Placement};

/// Deterministic element: every character advances by the same amount of
/// pixels, and line breaks can be scripted per attached fragment.
pub struct FakeElement {
    width: f32,
    advance: f32,
    content: String,
    attached: Vec<(String, Placement)>,
    scripted_lines: Option<Vec<usize>>,
    line: usize,
    x: f32,
    visible: bool,
    pub attach_calls: usize,
    pub detached_measurements: usize,
}

impl FakeElement {
    pub fn new(width: f32, advance: f32) -> Self {
        Self {
            width,
            advance,
            content: String::new(),
            attached: vec![],
            scripted_lines: None,
            line: 0,
            x: 0.0,
            visible: true,
            attach_calls: 0,
            detached_measurements: 0,
        }
    }

    /// The n-th attached fragment lands on `lines[n]`, whatever its width.
    pub fn with_scripted_lines(mut self, lines: Vec<usize>) -> Self {
        self.scripted_lines = Some(lines);
        self
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

impl MeasurementProvider for FakeElement {
    fn container_width(&self) -> f32 {
        self.width
    }

    fn clear(&mut self) {
        self.attached.clear();
        self.content.clear();
        self.line = 0;
        self.x = 0.0;
    }

    fn attach(&mut self, text: &str, style: FragmentStyle) -> FragmentHandle {
        self.attach_calls += 1;
        let width = self.text_width(text);
        let scripted = self
            .scripted_lines
            .as_ref()
            .and_then(|lines| lines.get(self.attached.len()).copied());

        match scripted {
            Some(line) if line != self.line => {
                self.line = line;
                self.x = 0.0;
            }
            Some(_) => (),
            None => {
                if style == FragmentStyle::NoWrap && self.x > 0.0 && self.x + width > self.width {
                    self.line += 1;
                    self.x = 0.0;
                }
            }
        }

        let placement = Placement {
            line: self.line,
            top: self.line as f32 * 20.0,
            left: self.x,
            width,
        };
        self.x += width;
        self.attached.push((text.to_owned(), placement));
        FragmentHandle(self.attached.len() - 1)
    }

    fn placement(&self, handle: FragmentHandle) -> Option<Placement> {
        self.attached.get(handle.0).map(|(_, placement)| *placement)
    }

    fn measure_detached(&mut self, text: &str) -> f32 {
        self.detached_measurements += 1;
        self.text_width(text)
    }
}

impl HostElement for FakeElement {
    fn text_content(&self) -> String {
        if self.attached.is_empty() {
            return self.content.clone();
        }
        self.attached
            .iter()
            .map(|(text, _)| text.replace('\u{00A0}', " "))
            .collect()
    }

    fn set_text_content(&mut self, text: &str) {
        self.clear();
        self.content = text.to_owned();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn apply_clamp_styles(&mut self) {}
}

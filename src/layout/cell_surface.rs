use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::tokenizer::tokenize;

use super::{
    provider::{FragmentHandle, FragmentStyle, HostElement, MeasurementProvider, Placement},
    width::{grapheme_width, string_width},
};

const NBSP: char = '\u{00A0}';

/// Inline flow cursor. Fragments are atomic: a no-wrap fragment that does not
/// fit on a non-empty line starts the next one, whitespace hangs at line end.
#[derive(Debug, Default, Clone, Copy)]
struct Flow {
    width: usize,
    line: usize,
    x: usize,
}

impl Flow {
    fn new(width: usize) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    fn place(&mut self, fragment_width: usize, style: FragmentStyle) -> Placement {
        if style == FragmentStyle::NoWrap && self.x > 0 && self.x + fragment_width > self.width {
            self.line += 1;
            self.x = 0;
        }

        let placement = Placement {
            line: self.line,
            top: self.line as f32,
            left: self.x as f32,
            width: fragment_width as f32,
        };
        self.x += fragment_width;
        placement
    }
}

#[derive(Debug, Clone)]
struct Child {
    text: String,
    style: FragmentStyle,
    placement: Placement,
}

/// A text element laid out in terminal cells, one cell per line of height.
#[derive(Debug, Clone)]
pub struct CellSurface {
    flow: Flow,
    content: String,
    children: Vec<Child>,
    visible: bool,
    overflow_hidden: bool,
}

impl CellSurface {
    pub fn new(columns: u16) -> Self {
        Self {
            flow: Flow::new(columns as usize),
            content: String::new(),
            children: vec![],
            visible: true,
            overflow_hidden: false,
        }
    }

    pub fn with_text(columns: u16, text: &str) -> Self {
        let mut surface = Self::new(columns);
        surface.content = text.to_owned();
        surface
    }

    pub fn columns(&self) -> u16 {
        self.flow.width as u16
    }

    /// Changes the container width and reflows attached fragments.
    pub fn resize(&mut self, columns: u16) {
        if columns as usize == self.flow.width {
            return;
        }
        debug!("surface resized from {} to {columns} columns", self.flow.width);

        self.flow = Flow::new(columns as usize);
        for child in &mut self.children {
            child.placement = self.flow.place(string_width(&child.text), child.style);
        }
    }

    /// The current content as it appears on screen, one string per line.
    pub fn rendered_lines(&self) -> Vec<String> {
        if !self.children.is_empty() {
            return self.collect_lines(&self.children);
        }

        let mut flow = Flow::new(self.flow.width);
        let children: Vec<Child> = tokenize(&self.content)
            .into_iter()
            .map(|fragment| {
                let text = fragment.display_text();
                let style = fragment.style();
                let placement = flow.place(string_width(&text), style);
                Child {
                    text,
                    style,
                    placement,
                }
            })
            .collect();
        self.collect_lines(&children)
    }

    fn collect_lines(&self, children: &[Child]) -> Vec<String> {
        let mut lines: Vec<String> = vec![];
        for child in children {
            while lines.len() <= child.placement.line {
                lines.push(String::new());
            }
            lines[child.placement.line].push_str(&child.text.replace(NBSP, " "));
        }

        lines
            .into_iter()
            .map(|line| {
                let line = line.trim_end();
                if self.overflow_hidden {
                    self.clip(line)
                } else {
                    line.to_owned()
                }
            })
            .collect()
    }

    fn clip(&self, line: &str) -> String {
        let mut clipped = String::new();
        let mut width = 0;
        for grapheme in line.graphemes(true) {
            width += grapheme_width(grapheme);
            if width > self.flow.width {
                break;
            }
            clipped.push_str(grapheme);
        }
        clipped
    }
}

impl MeasurementProvider for CellSurface {
    fn container_width(&self) -> f32 {
        self.flow.width as f32
    }

    fn clear(&mut self) {
        self.children.clear();
        self.content.clear();
        self.flow = Flow::new(self.flow.width);
    }

    fn attach(&mut self, text: &str, style: FragmentStyle) -> FragmentHandle {
        let placement = self.flow.place(string_width(text), style);
        self.children.push(Child {
            text: text.to_owned(),
            style,
            placement,
        });
        FragmentHandle(self.children.len() - 1)
    }

    fn placement(&self, handle: FragmentHandle) -> Option<Placement> {
        self.children.get(handle.0).map(|child| child.placement)
    }

    fn measure_detached(&mut self, text: &str) -> f32 {
        string_width(text) as f32
    }
}

impl HostElement for CellSurface {
    fn text_content(&self) -> String {
        if self.children.is_empty() {
            return self.content.clone();
        }
        self.children
            .iter()
            .map(|child| child.text.replace(NBSP, " "))
            .collect()
    }

    fn set_text_content(&mut self, text: &str) {
        self.children.clear();
        self.flow = Flow::new(self.flow.width);
        self.content = text.to_owned();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn apply_clamp_styles(&mut self) {
        self.overflow_hidden = true;
    }
}

//! SVG page assembly.

/// Collects the elements of one page. Axes append their content in draw
/// order; clip paths land in a shared `<defs>` block.
#[derive(Debug)]
pub struct SvgBackend {
    /// Page width in pixels
    pub width: f64,
    /// Page height in pixels
    pub height: f64,
    body: String,
    clip_paths: Vec<String>,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            body: String::new(),
            clip_paths: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: String) {
        self.body.push_str(&content);
        if !content.ends_with('\n') {
            self.body.push('\n');
        }
    }

    /// Register a rectangular clip region; returns the `clip-path` value
    /// that refers to it.
    pub fn clip_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> String {
        let id = format!("clip-{}", self.clip_paths.len());
        self.clip_paths.push(format!(
            "<clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath>",
            id, x, y, width, height
        ));
        format!("url(#{})", id)
    }

    /// Finish the page.
    pub fn render(self) -> String {
        let mut out = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        if !self.clip_paths.is_empty() {
            out.push_str("<defs>\n");
            for clip in &self.clip_paths {
                out.push_str(clip);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_ids_are_unique() {
        let mut backend = SvgBackend::new(100.0, 50.0);
        let a = backend.clip_rect(0.0, 0.0, 10.0, 10.0);
        let b = backend.clip_rect(5.0, 5.0, 10.0, 10.0);
        assert_ne!(a, b);
        backend.add_content("<g/>".to_string());
        let svg = backend.render();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert_eq!(svg.matches("<clipPath").count(), 2);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

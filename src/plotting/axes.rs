//! Axes (subplot) implementation.

use crate::plotting::backend::SvgBackend;
use crate::plotting::element::{
    escape_xml, AxisConfig, Bounds, GridConfig, Legend, LegendEntry, RenderContext, Text,
};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::{Line2D, Plot, PolygonPatch};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{Color, HAlign, TextStyle};

/// Handle to a line stored on an [`Axes`]. Stays valid until the line is
/// removed; removing other lines never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(usize);

/// An axes object representing a single plot area.
#[derive(Debug)]
pub struct Axes {
    /// Position within figure (normalized coordinates)
    pub position: Bounds,
    x_scale: Box<dyn Scale>,
    y_scale: Box<dyn Scale>,
    /// Line slots; removed lines leave `None` so ids stay stable
    lines: Vec<Option<Line2D>>,
    /// Patches are drawn underneath every line
    patches: Vec<PolygonPatch>,
    /// Title
    pub title: Option<Text>,
    /// X-axis label
    pub x_label: Option<Text>,
    /// Y-axis label
    pub y_label: Option<Text>,
    /// Style applied to axis labels set after it changes
    pub label_style: TextStyle,
    /// Style applied to the title
    pub title_style: TextStyle,
    legend: Option<Legend>,
    /// Grid configuration
    pub grid: GridConfig,
    /// X-axis configuration
    pub x_axis: AxisConfig,
    /// Y-axis configuration
    pub y_axis: AxisConfig,
    /// Plot area background
    pub background: Color,
    /// Draw a border around the whole plot area (insets)
    pub show_frame: bool,
    x_lim: Option<(f64, f64)>,
    y_lim: Option<(f64, f64)>,
}

impl Axes {
    /// Create a new axes with default settings.
    pub fn new() -> Self {
        Axes {
            position: Bounds::new(0.1, 0.9, 0.1, 0.9),
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            lines: Vec::new(),
            patches: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            label_style: TextStyle::new().font_size(12.0),
            title_style: TextStyle::new().font_size(14.0).bold(),
            legend: None,
            grid: GridConfig::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            background: Color::WHITE,
            show_frame: false,
            x_lim: None,
            y_lim: None,
        }
    }

    /// Set the position within the figure.
    pub fn position(mut self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.position = Bounds::new(left, right, bottom, top);
        self
    }

    /// Add a line and return its handle.
    pub fn add_line(&mut self, line: Line2D) -> LineId {
        self.lines.push(Some(line));
        LineId(self.lines.len() - 1)
    }

    pub fn line(&self, id: LineId) -> Option<&Line2D> {
        self.lines.get(id.0).and_then(Option::as_ref)
    }

    pub fn line_mut(&mut self, id: LineId) -> Option<&mut Line2D> {
        self.lines.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Detach a line from the axes.
    pub fn remove_line(&mut self, id: LineId) -> Option<Line2D> {
        self.lines.get_mut(id.0).and_then(Option::take)
    }

    /// Number of lines currently attached.
    pub fn num_lines(&self) -> usize {
        self.lines.iter().flatten().count()
    }

    /// Add a filled polygon patch.
    pub fn add_patch(&mut self, patch: PolygonPatch) {
        self.patches.push(patch);
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn set_xscale(&mut self, scale: Box<dyn Scale>) -> &mut Self {
        self.x_scale = scale;
        self
    }

    pub fn set_yscale(&mut self, scale: Box<dyn Scale>) -> &mut Self {
        self.y_scale = scale;
        self
    }

    pub fn xscale(&self) -> &dyn Scale {
        self.x_scale.as_ref()
    }

    pub fn yscale(&self) -> &dyn Scale {
        self.y_scale.as_ref()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, 0.0, 0.0).style(self.title_style.clone()));
        self
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(self.label_style.clone()));
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(self.label_style.clone()));
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(|t| t.content.as_str())
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.x_label.as_ref().map(|t| t.content.as_str())
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.y_label.as_ref().map(|t| t.content.as_str())
    }

    /// Set the x-axis limits. Both limits must be placeable on the x scale.
    pub fn set_xlim(&mut self, min: f64, max: f64) -> PlotResult<&mut Self> {
        check_limits("x", self.x_scale.as_ref(), min, max)?;
        self.x_lim = Some((min, max));
        Ok(self)
    }

    /// Set the y-axis limits. Both limits must be placeable on the y scale.
    pub fn set_ylim(&mut self, min: f64, max: f64) -> PlotResult<&mut Self> {
        check_limits("y", self.y_scale.as_ref(), min, max)?;
        self.y_lim = Some((min, max));
        Ok(self)
    }

    pub fn xlim(&self) -> Option<(f64, f64)> {
        self.x_lim
    }

    pub fn ylim(&self) -> Option<(f64, f64)> {
        self.y_lim
    }

    /// Enable or disable the grid.
    pub fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid.visible = visible;
        self
    }

    /// Hide tick marks and tick labels on both axes.
    pub fn hide_ticks(&mut self) -> &mut Self {
        self.x_axis.hide_ticks();
        self.y_axis.hide_ticks();
        self
    }

    /// Replace the legend. `None` removes it.
    pub fn set_legend(&mut self, legend: Option<Legend>) {
        self.legend = legend;
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Legend entries for the given lines, in the order given. Lines that
    /// no longer exist are skipped.
    pub fn legend_entries(&self, ids: &[LineId]) -> Vec<LegendEntry> {
        ids.iter()
            .filter_map(|id| self.line(*id))
            .filter_map(|line| line.legend_entry())
            .collect()
    }

    /// Bounds of all artist points that can be placed on the current scales.
    fn data_bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        let mut include = |x: f64, y: f64| {
            if self.x_scale.accepts(x) && self.y_scale.accepts(y) {
                bounds.include_point(x, y);
            }
        };
        for line in self.lines.iter().flatten() {
            for (&x, &y) in line.xdata().iter().zip(line.ydata()) {
                include(x, y);
            }
        }
        for patch in &self.patches {
            for &(x, y) in patch.rings.iter().flatten() {
                include(x, y);
            }
        }
        bounds.is_valid().then_some(bounds)
    }

    /// Resolve view limits and push them into the scales.
    fn autoscale(&mut self) -> PlotResult<()> {
        let data = self.data_bounds();
        let (x_min, x_max) = match (self.x_lim, data) {
            (Some(lim), _) => lim,
            (None, Some(b)) => pad_range(self.x_scale.as_ref(), b.x_min, b.x_max),
            (None, None) => self.x_scale.range(),
        };
        let (y_min, y_max) = match (self.y_lim, data) {
            (Some(lim), _) => lim,
            (None, Some(b)) => pad_range(self.y_scale.as_ref(), b.y_min, b.y_max),
            (None, None) => self.y_scale.range(),
        };
        self.x_scale.set_range(x_min, x_max)?;
        self.y_scale.set_range(y_min, y_max)?;
        Ok(())
    }

    /// Render the axes into the backend.
    pub fn render_svg(&mut self, backend: &mut SvgBackend) -> PlotResult<()> {
        self.autoscale()?;

        let figure_width = backend.width;
        let figure_height = backend.height;
        let mut svg = String::new();

        // Calculate pixel bounds for the plot area
        let pixel_bounds = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );

        svg.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
            self.background.to_svg_string()
        ));

        if self.grid.visible {
            svg.push_str(&self.render_grid(&pixel_bounds));
        }

        let ctx = RenderContext {
            x_scale: self.x_scale.as_ref(),
            y_scale: self.y_scale.as_ref(),
            pixel_bounds,
        };
        let clip = backend.clip_rect(
            pixel_bounds.x_min,
            pixel_bounds.y_min,
            pixel_bounds.width(),
            pixel_bounds.height(),
        );
        svg.push_str(&format!("<g clip-path=\"{}\">\n", clip));
        for patch in &self.patches {
            svg.push_str(&patch.render_svg(&ctx));
        }
        for line in self.lines.iter().flatten() {
            svg.push_str(&line.render_svg(&ctx));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_axes(&pixel_bounds));

        if let Some(ref title) = self.title {
            let mut t = title.clone();
            t.x = (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0;
            t.y = pixel_bounds.y_min - 10.0;
            t.style.align = HAlign::Center;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref label) = self.x_label {
            let mut t = label.clone();
            t.x = (pixel_bounds.x_min + pixel_bounds.x_max) / 2.0;
            t.y = pixel_bounds.y_max + 40.0;
            t.style.align = HAlign::Center;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref label) = self.y_label {
            let mut t = label.clone();
            t.x = pixel_bounds.x_min - 45.0;
            t.y = (pixel_bounds.y_min + pixel_bounds.y_max) / 2.0;
            t.style.align = HAlign::Center;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
            svg.push('\n');
        }

        if let Some(ref legend) = self.legend {
            if !legend.entries.is_empty() {
                svg.push_str(&render_legend(legend, &pixel_bounds));
            }
        }

        backend.add_content(svg);
        Ok(())
    }

    fn render_grid(&self, pb: &Bounds) -> String {
        let mut svg = String::new();
        for x_axis in [true, false] {
            for major in [true, false] {
                if !self.grid.draws(x_axis, major) {
                    continue;
                }
                let (scale, num_ticks) = if x_axis {
                    (self.x_scale.as_ref(), self.x_axis.num_ticks)
                } else {
                    (self.y_scale.as_ref(), self.y_axis.num_ticks)
                };
                let (ticks, style) = if major {
                    (scale.ticks(num_ticks), &self.grid.major_style)
                } else {
                    (scale.minor_ticks(num_ticks), &self.grid.minor_style)
                };
                for tick in ticks {
                    let t = scale.transform(tick);
                    let (x1, y1, x2, y2) = if x_axis {
                        let px = pb.x_min + t * pb.width();
                        (px, pb.y_min, px, pb.y_max)
                    } else {
                        let py = pb.y_max - t * pb.height();
                        (pb.x_min, py, pb.x_max, py)
                    };
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {} stroke-opacity=\"{}\"/>\n",
                        x1, y1, x2, y2,
                        style.to_svg_style(),
                        self.grid.alpha
                    ));
                }
            }
        }
        svg
    }

    fn render_axes(&self, pixel_bounds: &Bounds) -> String {
        let mut svg = String::new();

        if self.show_frame {
            svg.push_str(&format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                pixel_bounds.x_min,
                pixel_bounds.y_min,
                pixel_bounds.width(),
                pixel_bounds.height(),
                self.x_axis.line_style.color.to_svg_string(),
                self.x_axis.line_style.width
            ));
        }

        // X axis
        if self.x_axis.visible {
            if !self.show_frame {
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    pixel_bounds.x_min, pixel_bounds.y_max,
                    pixel_bounds.x_max, pixel_bounds.y_max,
                    self.x_axis.line_style.color.to_svg_string(),
                    self.x_axis.line_style.width
                ));
            }

            for (tick, label) in tick_marks(&self.x_axis, self.x_scale.as_ref()) {
                let px = pixel_bounds.x_min + self.x_scale.transform(tick) * pixel_bounds.width();

                if self.x_axis.show_ticks {
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                        px, pixel_bounds.y_max,
                        px, pixel_bounds.y_max + self.x_axis.tick_length,
                        self.x_axis.line_style.color.to_svg_string()
                    ));
                }
                if self.x_axis.show_tick_labels {
                    svg.push_str(&format!(
                        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" {}>{}</text>\n",
                        px,
                        pixel_bounds.y_max
                            + self.x_axis.tick_length
                            + self.x_axis.tick_padding
                            + self.x_axis.tick_label_style.font_size,
                        self.x_axis.tick_label_style.to_svg_attrs(),
                        escape_xml(&label)
                    ));
                }
            }
        }

        // Y axis
        if self.y_axis.visible {
            if !self.show_frame {
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                    pixel_bounds.x_min, pixel_bounds.y_min,
                    pixel_bounds.x_min, pixel_bounds.y_max,
                    self.y_axis.line_style.color.to_svg_string(),
                    self.y_axis.line_style.width
                ));
            }

            for (tick, label) in tick_marks(&self.y_axis, self.y_scale.as_ref()) {
                let py = pixel_bounds.y_max - self.y_scale.transform(tick) * pixel_bounds.height();

                if self.y_axis.show_ticks {
                    svg.push_str(&format!(
                        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                        pixel_bounds.x_min - self.y_axis.tick_length, py,
                        pixel_bounds.x_min, py,
                        self.y_axis.line_style.color.to_svg_string()
                    ));
                }
                if self.y_axis.show_tick_labels {
                    svg.push_str(&format!(
                        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\" {}>{}</text>\n",
                        pixel_bounds.x_min - self.y_axis.tick_length - self.y_axis.tick_padding,
                        py,
                        self.y_axis.tick_label_style.to_svg_attrs(),
                        escape_xml(&label)
                    ));
                }
            }
        }

        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

fn check_limits(axis: &str, scale: &dyn Scale, min: f64, max: f64) -> PlotResult<()> {
    if !scale.accepts(min) || !scale.accepts(max) {
        return Err(PlotError::InvalidConfig(format!(
            "{} limits ({}, {}) are not valid on a {} scale",
            axis,
            min,
            max,
            scale.name()
        )));
    }
    Ok(())
}

/// Autoscaled range: linear-style scales get 5% margins, log scales none.
fn pad_range(scale: &dyn Scale, min: f64, max: f64) -> (f64, f64) {
    if scale.name() == "log" || min == max {
        return (min, max);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

/// Tick positions inside the visible range, paired with their labels.
fn tick_marks(axis: &AxisConfig, scale: &dyn Scale) -> Vec<(f64, String)> {
    let (lo, hi) = scale.range();
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    let ticks = match axis.tick_positions {
        Some(ref positions) => positions.clone(),
        None => scale.ticks(axis.num_ticks),
    };
    let labels: Vec<String> = match (axis.tick_positions.as_ref(), axis.tick_labels.as_ref()) {
        (Some(_), Some(custom)) => custom.clone(),
        _ => ticks
            .iter()
            .map(|t| scale.format_tick(*t).unwrap_or_else(|| axis.format_tick(*t)))
            .collect(),
    };
    ticks
        .into_iter()
        .zip(labels)
        .filter(|(t, _)| *t >= lo && *t <= hi)
        .collect()
}

/// Lay entries out column by column, `legend.ncols` wide.
fn render_legend(legend: &Legend, pixel_bounds: &Bounds) -> String {
    let mut svg = String::new();

    let rows = legend.rows();
    let ncols = legend.ncols.max(1);
    let line_height = legend.text_style.font_size * 1.5;
    let label_width = legend
        .entries
        .iter()
        .map(|e| legend.text_style.approx_width(&e.label))
        .fold(0.0, f64::max);
    let column_width = legend.line_length + legend.label_gap + label_width;
    let legend_width = ncols as f64 * column_width
        + (ncols - 1) as f64 * legend.column_gap
        + legend.padding * 2.0;
    let legend_height = rows as f64 * line_height + legend.padding * 2.0;

    let ((ax, ay), (fx, fy)) = legend.position.anchor();
    let lx = pixel_bounds.x_min + ax * pixel_bounds.width() - fx * legend_width;
    let ly = pixel_bounds.y_min + (1.0 - ay) * pixel_bounds.height() - fy * legend_height;

    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
        lx,
        ly,
        legend_width,
        legend_height,
        legend.background.to_svg_style()
    ));

    for (i, entry) in legend.entries.iter().enumerate() {
        let col = i / rows;
        let row = i % rows;
        let ex = lx + legend.padding + col as f64 * (column_width + legend.column_gap);
        let ey = ly + legend.padding + (row as f64 + 0.5) * line_height;
        let line_x2 = ex + legend.line_length;
        let line_mid = (ex + line_x2) / 2.0;

        if let Some(ref line_style) = entry.line_style {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                ex,
                ey,
                line_x2,
                ey,
                line_style.to_svg_style()
            ));
        }
        if let Some(ref marker_style) = entry.marker_style {
            svg.push_str(&marker_style.render_at(line_mid, ey));
        }

        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"middle\" {}>{}</text>\n",
            line_x2 + legend.label_gap,
            ey,
            legend.text_style.to_svg_attrs(),
            escape_xml(&entry.label)
        ));
    }

    svg
}

//! Plot session: one figure, a color palette, a feature registry with a
//! legend mask, and an optional minimap.
//!
//! Features are line artists on the main axes that a caller registers up
//! front (with a style, color and label) and then fills with data page by
//! page. The legend shows the features whose legend flag is set, in
//! registration order.

mod minimap;
mod palette;
mod registry;

pub use minimap::Minimap;
pub use palette::{Palette, PALETTE};
pub use registry::FeatureId;

use std::path::Path;

use log::{debug, info};

use crate::config::{AxisScale, LegendConfig, MinimapConfig, SessionConfig};
use crate::error::{Error, Result};
use crate::export::PageSink;
use crate::plotting::{
    Axes, AxesId, Color, DateScale, Figure, GridConfig, IntoPlotData, Legend, Line2D,
    LineFormat, LinearScale, LogScale, Scale, TextStyle,
};
use crate::shapes::{OverlayReport, ShapeSource};
use registry::{FeatureEntry, FeatureRegistry};

/// Label given to features registered without one.
pub const DEFAULT_LABEL: &str = "New Feature";
/// Label of the legend-only non-detect symbol.
pub const NON_DETECT_LABEL: &str = "Non-Detects";
/// Edge color of the non-detect symbol when none is given.
pub const NON_DETECT_COLOR: &str = "#666666";

/// Major tick label format on a date x axis.
pub const DATE_TICK_FORMAT: &str = "%Y";

/// A plotting session.
#[derive(Debug)]
pub struct Session {
    figure: Figure,
    main: AxesId,
    config: SessionConfig,
    palette: Palette,
    features: FeatureRegistry,
    legend: Option<LegendConfig>,
    legend_dirty: bool,
    minimap: Option<Minimap>,
}

fn scale_for(scale: AxisScale) -> Box<dyn Scale> {
    match scale {
        AxisScale::Linear => Box::new(LinearScale::auto()),
        AxisScale::Log => Box::new(LogScale::auto()),
        AxisScale::Date => Box::new(DateScale::new().with_format(DATE_TICK_FORMAT)),
    }
}

impl Session {
    /// Create a session and configure its main axes.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        let mut figure = Figure::from_inches(config.fig_width, config.fig_height)?;
        let main = figure.add_subplot();
        let axes = &mut figure[main];

        axes.label_style = TextStyle::new().font_size(10.0);
        axes.set_xlabel(config.xlabel.as_str());
        axes.set_ylabel(config.ylabel.as_str());
        axes.x_axis.tick_label_style.font_size = 12.0;

        if config.xscale == AxisScale::Date {
            axes.set_xlabel("Date");
            axes.x_axis.tick_label_style.font_size = 8.0;
        }
        axes.set_xscale(scale_for(config.xscale));
        axes.set_yscale(scale_for(config.yscale));
        axes.grid = GridConfig::minor_x();
        axes.set_xlim(config.xlims.0, config.xlims.1)?;
        axes.set_ylim(config.ylims.0, config.ylims.1)?;

        info!(
            "Created session: {} x {} axes, {:.1} x {:.1} in",
            config.xscale.as_str(),
            config.yscale.as_str(),
            config.fig_width,
            config.fig_height
        );

        Ok(Session {
            figure,
            main,
            config,
            palette: Palette::new(),
            features: FeatureRegistry::new(),
            legend: None,
            legend_dirty: false,
            minimap: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The main axes.
    pub fn axes(&self) -> &Axes {
        &self.figure[self.main]
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register one feature with no data.
    ///
    /// Without a color, one is checked out of the palette. Without a label the
    /// feature is called [`DEFAULT_LABEL`]. `empty` draws markers as a
    /// colored outline with no fill.
    pub fn add_feature(
        &mut self,
        style: &str,
        color: Option<Color>,
        label: Option<&str>,
        in_legend: bool,
        empty: bool,
    ) -> Result<FeatureId> {
        LineFormat::parse(style)?;
        let color = match color {
            Some(c) => c,
            None => self.palette.checkout()?,
        };
        let mut line = Line2D::new(style, Some(color.clone()))?.label(label.unwrap_or(DEFAULT_LABEL));
        if empty {
            line = line.hollow();
        }
        Ok(self.register(line, color, in_legend))
    }

    fn register(&mut self, line: Line2D, color: Color, in_legend: bool) -> FeatureId {
        let line = self.figure[self.main].add_line(line);
        let id = self.features.insert(FeatureEntry {
            line,
            color,
            in_legend,
        });
        self.legend_dirty = true;
        debug!(
            "New feature {} at position {}",
            id,
            self.features.len() - 1
        );
        id
    }

    /// Register `n` features sharing one color.
    pub fn add_features_same_color(
        &mut self,
        n: usize,
        style: &str,
        color: Option<Color>,
        in_legend: bool,
    ) -> Result<Vec<FeatureId>> {
        LineFormat::parse(style)?;
        let color = match color {
            Some(c) => c,
            None => self.palette.checkout()?,
        };
        (0..n)
            .map(|_| self.add_feature(style, Some(color.clone()), None, in_legend, false))
            .collect()
    }

    /// Register `n` features, each with its own palette color.
    pub fn add_features(&mut self, n: usize, style: &str, in_legend: bool) -> Result<Vec<FeatureId>> {
        (0..n)
            .map(|_| self.add_feature(style, None, None, in_legend, false))
            .collect()
    }

    /// Register a detect/non-detect pair in one color: a normal feature shown
    /// in the legend and an outline-only mate hidden from it.
    pub fn add_nd_pair_feature(
        &mut self,
        style: &str,
        color: Option<Color>,
    ) -> Result<(FeatureId, FeatureId)> {
        LineFormat::parse(style)?;
        let color = match color {
            Some(c) => c,
            None => self.palette.checkout()?,
        };
        let detect = self.add_feature(style, Some(color.clone()), None, true, false)?;
        let non_detect = self.add_feature(style, Some(color), None, false, true)?;
        Ok((detect, non_detect))
    }

    /// Register features for every (location, analyte) combination.
    ///
    /// Each analyte gets one palette color, shared across locations; each
    /// location gets the style at the same position in `symbols`. With `nd`
    /// every feature is followed by its legend-hidden non-detect mate.
    pub fn mass_add_chem(
        &mut self,
        num_locations: usize,
        num_analytes: usize,
        symbols: &[&str],
        nd: bool,
    ) -> Result<Vec<FeatureId>> {
        if symbols.len() < num_locations {
            return Err(Error::invalid(
                "symbols",
                format!(
                    "need one symbol per location ({}), got {}",
                    num_locations,
                    symbols.len()
                ),
            ));
        }
        for symbol in &symbols[..num_locations] {
            LineFormat::parse(symbol)?;
        }

        let colors = (0..num_analytes)
            .map(|_| self.palette.checkout())
            .collect::<Result<Vec<_>>>()?;

        let mut ids = Vec::with_capacity(num_locations * num_analytes * if nd { 2 } else { 1 });
        for (location, symbol) in symbols.iter().take(num_locations).enumerate() {
            debug!("Adding features for location {}", location);
            for color in &colors {
                ids.push(self.add_feature(symbol, Some(color.clone()), None, true, false)?);
                if nd {
                    ids.push(self.add_feature(symbol, Some(color.clone()), None, false, true)?);
                }
            }
        }
        info!(
            "Added {} features for {} locations x {} analytes",
            ids.len(),
            num_locations,
            num_analytes
        );
        Ok(ids)
    }

    /// Register the legend-only non-detect symbol: an outline circle labelled
    /// [`NON_DETECT_LABEL`]. It does not use the palette.
    pub fn add_legend_nd_feature(&mut self, color: Option<Color>) -> Result<FeatureId> {
        let color = color.unwrap_or_else(|| Color::from(NON_DETECT_COLOR));
        let line = Line2D::new("o", Some(color.clone()))?
            .label(NON_DETECT_LABEL)
            .hollow();
        Ok(self.register(line, color, true))
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    fn entry(&self, id: FeatureId) -> Result<&FeatureEntry> {
        self.features.get(id).ok_or(Error::UnknownFeature(id))
    }

    fn line_mut(&mut self, id: FeatureId) -> Result<&mut Line2D> {
        let line = self.entry(id)?.line;
        self.figure[self.main]
            .line_mut(line)
            .ok_or(Error::UnknownFeature(id))
    }

    /// Replace a feature's data and legend flag, and optionally its label.
    pub fn update_feature(
        &mut self,
        id: FeatureId,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
        label: Option<&str>,
        in_legend: bool,
    ) -> Result<()> {
        let (x, y) = (x.into_plot_data(), y.into_plot_data());
        let line = self.line_mut(id)?;
        line.set_data(x, y)?;
        if let Some(label) = label {
            line.set_label(label);
        }
        if let Some(entry) = self.features.get_mut(id) {
            entry.in_legend = in_legend;
        }
        self.legend_dirty = true;
        Ok(())
    }

    /// Clear a feature's data and hide it from the legend.
    pub fn mask_feature(&mut self, id: FeatureId) -> Result<()> {
        self.update_feature(id, Vec::<f64>::new(), Vec::<f64>::new(), None, false)
    }

    pub fn mask_features(&mut self, ids: &[FeatureId]) -> Result<()> {
        ids.iter().try_for_each(|id| self.mask_feature(*id))
    }

    /// Remove a feature and return its color to the palette.
    ///
    /// The color is checked in even if another feature still uses it.
    pub fn remove_feature(&mut self, id: FeatureId) -> Result<()> {
        let entry = self.features.remove(id).ok_or(Error::UnknownFeature(id))?;
        self.palette.checkin(&entry.color);
        self.figure[self.main].remove_line(entry.line);
        self.legend_dirty = true;
        debug!("Removed feature {}", id);
        Ok(())
    }

    pub fn remove_features(&mut self, ids: &[FeatureId]) -> Result<()> {
        ids.iter().try_for_each(|id| self.remove_feature(*id))
    }

    /// Set the main axes title.
    pub fn set_title(&mut self, title: &str) {
        self.figure[self.main].set_title(title);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The feature's line.
    pub fn feature(&self, id: FeatureId) -> Result<&Line2D> {
        let line = self.entry(id)?.line;
        self.figure[self.main]
            .line(line)
            .ok_or(Error::UnknownFeature(id))
    }

    pub fn in_legend(&self, id: FeatureId) -> Result<bool> {
        Ok(self.entry(id)?.in_legend)
    }

    /// Feature ids in registration order.
    pub fn feature_ids(&self) -> Vec<FeatureId> {
        self.features.ids()
    }

    /// Legend flags, aligned with [`Session::feature_ids`].
    pub fn legend_mask(&self) -> Vec<bool> {
        self.features.legend_mask()
    }

    /// Current position of a feature in registration order.
    pub fn index_of(&self, id: FeatureId) -> Option<usize> {
        self.features.index_of(id)
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    // ------------------------------------------------------------------
    // Legend
    // ------------------------------------------------------------------

    /// Store legend settings and build the legend. Returns the entry count.
    pub fn create_legend(&mut self, loc: &str, size: f64, ncols: usize) -> Result<usize> {
        let config = LegendConfig::new(loc, size, ncols);
        config.position()?;
        self.legend = Some(config);
        self.rebuild_legend()
    }

    /// Rebuild the legend from the features whose legend flag is set. A new
    /// column count replaces the stored one.
    pub fn update_legend(&mut self, ncols: Option<usize>) -> Result<usize> {
        let config = self.legend.as_mut().ok_or(Error::LegendNotCreated)?;
        if let Some(ncols) = ncols {
            config.ncols = ncols;
        }
        self.rebuild_legend()
    }

    fn rebuild_legend(&mut self) -> Result<usize> {
        let config = self.legend.as_ref().ok_or(Error::LegendNotCreated)?;
        let position = config.position()?;
        let axes = &mut self.figure[self.main];
        let entries = axes.legend_entries(&self.features.legend_lines());
        let count = entries.len();
        let legend = Legend::new(entries)
            .position(position)
            .font_size(config.size)
            .ncols(config.ncols);
        axes.set_legend(Some(legend));
        self.legend_dirty = false;
        debug!("Legend rebuilt with {} entries", count);
        Ok(count)
    }

    /// Labels shown in the legend as last built.
    pub fn legend_labels(&self) -> Vec<String> {
        self.axes()
            .legend()
            .map(|legend| legend.labels().into_iter().map(String::from).collect())
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Minimap
    // ------------------------------------------------------------------

    /// Add the minimap inset with optional shape overlays, one color per
    /// shape layer.
    pub fn create_minimap<S: ShapeSource>(
        &mut self,
        config: &MinimapConfig,
        shapes: &[S],
        shape_colors: &[Color],
    ) -> Result<OverlayReport> {
        if self.minimap.is_some() {
            return Err(Error::MinimapExists);
        }
        let (minimap, report) = Minimap::create(&mut self.figure, config, shapes, shape_colors)?;
        self.minimap = Some(minimap);
        Ok(report)
    }

    /// Move the minimap's current-location marker and set its color and size.
    pub fn minimap_current_loc(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
        color: impl Into<Color>,
        size: f64,
    ) -> Result<()> {
        let minimap = self.minimap.ok_or(Error::NoMinimap)?;
        minimap.set_current(
            &mut self.figure,
            x.into_plot_data(),
            y.into_plot_data(),
            color.into(),
            size,
        )
    }

    pub fn minimap(&self) -> Option<&Minimap> {
        self.minimap.as_ref()
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Render the current page to SVG, rebuilding a stale legend first.
    pub fn render(&mut self) -> Result<String> {
        if self.legend_dirty && self.legend.is_some() {
            self.rebuild_legend()?;
        }
        Ok(self.figure.render()?)
    }

    /// Render the current page to an SVG file.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render()?;
        std::fs::write(path, svg)?;
        Ok(())
    }

    /// Render the current page and append it to a caller-owned document.
    pub fn add_to_document<S: PageSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        let svg = self.render()?;
        sink.add_page(svg)?;
        info!("Added page {} to document", sink.page_count());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PageBuffer;
    use crate::plotting::{date_to_num, Column};
    use crate::shapes::{Geometry, ShapeLayer};
    use chrono::NaiveDate;

    fn session() -> Session {
        let mut config = SessionConfig::new((0.0, 10.0), (0.0, 100.0));
        config.xlabel = "Distance".to_string();
        config.ylabel = "Concentration".to_string();
        Session::new(config).unwrap()
    }

    fn minimap_config() -> MinimapConfig {
        MinimapConfig {
            left: 0.7,
            bottom: 0.7,
            width: 0.2,
            height: 0.2,
            x: vec![1.0, 2.0, 3.0],
            y: vec![4.0, 5.0, 6.0],
            xbuffer: 0.5,
            ybuffer: 0.5,
            color: "#bab0ac".to_string(),
            size: 4.0,
        }
    }

    #[test]
    fn test_new_applies_axes_settings() {
        let s = session();
        let axes = s.axes();
        assert_eq!(axes.xlabel(), Some("Distance"));
        assert_eq!(axes.ylabel(), Some("Concentration"));
        assert_eq!(axes.x_label.as_ref().unwrap().style.font_size, 10.0);
        assert_eq!(axes.x_axis.tick_label_style.font_size, 12.0);
        assert_eq!(axes.xlim(), Some((0.0, 10.0)));
        assert!(axes.grid.draws(true, false) && !axes.grid.draws(true, true));
        assert_eq!(s.figure().width, 1100.0);
    }

    #[test]
    fn test_date_scale_forces_label() {
        let mut config = SessionConfig::new(
            (
                date_to_num(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()),
                date_to_num(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()),
            ),
            (0.0, 1.0),
        );
        config.xlabel = "Sampled".to_string();
        config.xscale = AxisScale::Date;
        let s = Session::new(config).unwrap();
        assert_eq!(s.axes().xlabel(), Some("Date"));
        assert_eq!(s.axes().xscale().name(), "date");
        assert_eq!(s.axes().x_axis.tick_label_style.font_size, 8.0);
        let year = date_to_num(NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        assert_eq!(s.axes().xscale().format_tick(year).as_deref(), Some("2012"));
    }

    #[test]
    fn test_date_y_and_bad_log_limits_rejected() {
        let mut config = SessionConfig::new((0.0, 1.0), (0.0, 1.0));
        config.yscale = AxisScale::Date;
        assert!(matches!(Session::new(config.clone()), Err(Error::Config { .. })));
        config.yscale = AxisScale::Log;
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_add_feature_defaults() {
        let mut s = session();
        let id = s.add_feature("o", None, None, true, false).unwrap();
        let line = s.feature(id).unwrap();
        assert_eq!(line.get_label(), DEFAULT_LABEL);
        assert_eq!(line.color(), &Color::from(PALETTE[0]));
        assert!(line.xdata().is_empty());
        assert_eq!(s.legend_mask(), vec![true]);
    }

    #[test]
    fn test_bad_style_changes_nothing() {
        let mut s = session();
        assert!(s.add_feature("zz", None, None, true, false).is_err());
        assert_eq!(s.num_features(), 0);
        assert_eq!(s.legend_mask().len(), 0);
        assert_eq!(s.palette().available(), 10);
    }

    #[test]
    fn test_palette_exhaustion_keeps_mask_aligned() {
        let mut s = session();
        s.add_features(10, "o", true).unwrap();
        assert!(matches!(
            s.add_feature("o", None, None, true, false),
            Err(Error::PaletteExhausted(10))
        ));
        assert_eq!(s.num_features(), 10);
        assert_eq!(s.legend_mask().len(), 10);
    }

    #[test]
    fn test_empty_feature_is_hollow() {
        let mut s = session();
        let id = s.add_feature("s", Some(Color::RED), None, false, true).unwrap();
        let marker = s.feature(id).unwrap().marker().unwrap();
        assert_eq!(marker.fill, Color::TRANSPARENT);
        assert_eq!(marker.edge_color, Color::RED);
        assert_eq!(s.palette().available(), 10);
    }

    #[test]
    fn test_same_color_uses_one_checkout() {
        let mut s = session();
        let ids = s.add_features_same_color(3, "o", None, true).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(s.palette().available(), 9);
        for id in ids {
            assert_eq!(s.feature(id).unwrap().color(), &Color::from(PALETTE[0]));
        }
    }

    #[test]
    fn test_nd_pair() {
        let mut s = session();
        let (detect, nd) = s.add_nd_pair_feature("^", None).unwrap();
        assert_eq!(s.legend_mask(), vec![true, false]);
        assert_eq!(s.feature(detect).unwrap().color(), s.feature(nd).unwrap().color());
        assert_eq!(s.feature(nd).unwrap().marker().unwrap().fill, Color::TRANSPARENT);
        assert_eq!(s.palette().available(), 9);
    }

    #[test]
    fn test_mass_add_chem() {
        let mut s = session();
        let ids = s.mass_add_chem(2, 3, &["o", "s"], true).unwrap();
        assert_eq!(ids.len(), 12);
        assert_eq!(s.palette().available(), 7);

        let mask = s.legend_mask();
        for (i, shown) in mask.iter().enumerate() {
            assert_eq!(*shown, i % 2 == 0);
        }
        // Analyte j at location 0 and location 1 share a color
        for analyte in 0..3 {
            let first = s.feature(ids[analyte * 2]).unwrap().color().clone();
            let second = s.feature(ids[6 + analyte * 2]).unwrap().color();
            assert_eq!(&first, second);
        }
        let marker = s.feature(ids[6]).unwrap().marker().unwrap().marker;
        assert_eq!(marker, crate::plotting::Marker::Square);
    }

    #[test]
    fn test_mass_add_chem_needs_symbols() {
        let mut s = session();
        assert!(s.mass_add_chem(3, 2, &["o", "s"], false).is_err());
        assert_eq!(s.palette().available(), 10);
        let ids = s.mass_add_chem(2, 2, &["o", "s", "^"], false).unwrap();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_legend_nd_feature() {
        let mut s = session();
        let id = s.add_legend_nd_feature(None).unwrap();
        let line = s.feature(id).unwrap();
        assert_eq!(line.get_label(), NON_DETECT_LABEL);
        assert_eq!(line.marker().unwrap().edge_color, Color::from(NON_DETECT_COLOR));
        assert!(s.in_legend(id).unwrap());
        assert_eq!(s.palette().available(), 10);
    }

    #[test]
    fn test_update_and_mask() {
        let mut s = session();
        let id = s.add_feature("o", None, None, false, false).unwrap();
        s.update_feature(id, Column::new("x", vec![1.0, 2.0]), [3.0, 4.0], Some("MW-1"), true)
            .unwrap();
        assert_eq!(s.feature(id).unwrap().ydata(), &[3.0, 4.0]);
        assert_eq!(s.feature(id).unwrap().get_label(), "MW-1");
        assert!(s.in_legend(id).unwrap());

        assert!(s.update_feature(id, vec![1.0], vec![1.0, 2.0], None, true).is_err());

        s.mask_feature(id).unwrap();
        assert!(s.feature(id).unwrap().xdata().is_empty());
        assert!(!s.in_legend(id).unwrap());
        assert_eq!(s.feature(id).unwrap().get_label(), "MW-1");
    }

    #[test]
    fn test_remove_releases_color_and_keeps_ids() {
        let mut s = session();
        let ids = s.add_features(3, "o", true).unwrap();
        s.remove_feature(ids[0]).unwrap();
        assert_eq!(s.feature_ids(), vec![ids[1], ids[2]]);
        assert_eq!(s.index_of(ids[2]), Some(1));
        assert!(matches!(s.remove_feature(ids[0]), Err(Error::UnknownFeature(_))));
        assert!(s.update_feature(ids[0], vec![1.0], vec![1.0], None, true).is_err());

        let reused = s.add_feature("o", None, None, true, false).unwrap();
        assert_eq!(s.feature(reused).unwrap().color(), &Color::from(PALETTE[0]));

        s.remove_features(&[ids[2], ids[1]]).unwrap();
        assert_eq!(s.feature_ids(), vec![reused]);
        assert_eq!(s.legend_mask().len(), 1);
    }

    #[test]
    fn test_legend_follows_mask() {
        let mut s = session();
        assert!(matches!(s.update_legend(None), Err(Error::LegendNotCreated)));
        s.add_features(4, "o", false).unwrap();
        let shown = s.add_feature("s", None, Some("Benzene"), true, false).unwrap();
        assert_eq!(s.create_legend("upper left", 8.0, 1).unwrap(), 1);
        assert_eq!(s.legend_labels(), vec!["Benzene".to_string()]);

        assert_eq!(s.update_legend(Some(3)).unwrap(), 1);
        assert_eq!(s.axes().legend().unwrap().ncols, 3);
        s.mask_feature(shown).unwrap();
        assert_eq!(s.update_legend(None).unwrap(), 0);
        assert_eq!(s.axes().legend().unwrap().ncols, 3);

        assert!(s.create_legend("sideways", 8.0, 1).is_err());
    }

    #[test]
    fn test_render_rebuilds_stale_legend() {
        let mut s = session();
        s.create_legend("best", 10.0, 1).unwrap();
        let id = s.add_feature("o", None, Some("Toluene"), true, false).unwrap();
        s.update_feature(id, vec![1.0, 2.0], vec![10.0, 20.0], None, true).unwrap();
        let svg = s.render().unwrap();
        assert!(svg.contains(">Toluene</text>"));
        assert_eq!(s.legend_labels(), vec!["Toluene".to_string()]);
    }

    #[test]
    fn test_minimap() {
        let mut s = session();
        assert!(matches!(
            s.minimap_current_loc(vec![1.0], vec![1.0], "#000000", 5.0),
            Err(Error::NoMinimap)
        ));

        let parcels = ShapeLayer::new(
            "parcels",
            5,
            vec![Geometry::new(vec![vec![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]])],
        );
        let report = s
            .create_minimap(&minimap_config(), &[parcels], &[Color::LIGHT_GRAY])
            .unwrap();
        assert_eq!(report.patches, 1);

        let minimap = *s.minimap().unwrap();
        let inset = &s.figure()[minimap.axes()];
        assert_eq!(inset.xlim(), Some((0.5, 3.5)));
        assert_eq!(inset.ylim(), Some((3.5, 6.5)));
        assert!(!inset.x_axis.show_tick_labels && !inset.y_axis.show_ticks);

        s.minimap_current_loc(vec![2.0], vec![5.0], "#e15759", 8.0).unwrap();
        let inset = &s.figure()[minimap.axes()];
        let current = inset.line(minimap.current_location()).unwrap();
        assert_eq!(current.xdata(), &[2.0]);
        let marker = current.marker().unwrap();
        assert_eq!(marker.fill, Color::from("#e15759"));
        assert_eq!(marker.edge_color, Color::from("#e15759"));
        assert_eq!(marker.size, 8.0);

        let none: [ShapeLayer; 0] = [];
        assert!(matches!(
            s.create_minimap(&minimap_config(), &none, &[]),
            Err(Error::MinimapExists)
        ));
    }

    #[test]
    fn test_minimap_requires_points() {
        let mut s = session();
        let mut config = minimap_config();
        config.x.clear();
        let none: [ShapeLayer; 0] = [];
        assert!(matches!(
            s.create_minimap(&config, &none, &[]),
            Err(Error::Plot(crate::plotting::PlotError::EmptyData))
        ));
        assert!(s.minimap().is_none());
    }

    #[test]
    fn test_add_to_document() {
        let mut s = session();
        let id = s.add_feature("o-", None, Some("MW-2"), true, false).unwrap();
        let mut doc = PageBuffer::new();
        s.update_feature(id, vec![1.0, 2.0], vec![3.0, 4.0], None, true).unwrap();
        s.add_to_document(&mut doc).unwrap();
        s.set_title("Page two");
        s.add_to_document(&mut doc).unwrap();
        assert_eq!(doc.pages().len(), 2);
        assert!(doc.pages()[1].contains(">Page two</text>"));
        assert!(!doc.pages()[0].contains("Page two"));
    }
}

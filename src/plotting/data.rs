//! Data handling traits and utilities.
//!
//! Every x/y input in the crate goes through [`IntoPlotData`] exactly once, at
//! the API boundary. Labelled tabular columns ([`Column`]) are unwrapped to
//! their values here so nothing downstream cares where the numbers came from.

/// Trait for types that can be converted into plot data.
pub trait IntoPlotData {
    /// Convert into a vector of f64 values.
    fn into_plot_data(self) -> Vec<f64>;
}

/// A named column of values, as pulled from a table or data frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: impl IntoPlotData) -> Self {
        Column {
            name: name.into(),
            values: values.into_plot_data(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoPlotData for Column {
    fn into_plot_data(self) -> Vec<f64> {
        self.values
    }
}

impl IntoPlotData for &Column {
    fn into_plot_data(self) -> Vec<f64> {
        self.values.clone()
    }
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

impl IntoPlotData for &Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.clone()
    }
}

impl IntoPlotData for &[f64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoPlotData for Vec<f32> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl IntoPlotData for &[f32] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

impl IntoPlotData for Vec<i32> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl IntoPlotData for &[i32] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

impl IntoPlotData for Vec<i64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl IntoPlotData for &[i64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

impl<const N: usize> IntoPlotData for [f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPlotData for &[f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPlotData for [i32; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

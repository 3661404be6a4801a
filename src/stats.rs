/// Running element-wise sum of several series.
///
/// The first series added fixes the length of the sum. Later series are
/// added up to the shorter of the two lengths.
pub struct SeriesSum {
    n_series: usize,
    sum_vec: Vec<f64>,
}

impl SeriesSum {
    pub fn new() -> Self {
        Self {
            n_series: 0,
            sum_vec: Vec::new(),
        }
    }

    pub fn add(&mut self, series: &[f64]) {
        if self.n_series == 0 {
            self.sum_vec = series.to_vec();
        } else {
            for (sum, &val) in self.sum_vec.iter_mut().zip(series) {
                *sum += val;
            }
        }
        self.n_series += 1;
    }

    pub fn n_series(&self) -> usize {
        self.n_series
    }

    pub fn len(&self) -> usize {
        self.sum_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sum_vec.is_empty()
    }

    /// Element-wise mean over all added series.
    pub fn mean(&self) -> Vec<f64> {
        let n_series = self.n_series as f64;
        self.sum_vec.iter().map(|&sum| sum / n_series).collect()
    }
}

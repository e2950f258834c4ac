use std::array;

use super::Trajectory;

/// `N` decoupled axes evaluated independently and combined into one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes<T, const N: usize> {
    axes: [T; N],
}

impl<T, const N: usize> Axes<T, N> {
    pub fn from_axes(axes: [T; N]) -> Self {
        Self { axes }
    }

    pub fn axis(&self, i: usize) -> Option<&T> {
        self.axes.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.axes.iter()
    }
}

impl<T: Trajectory<f64, f64>, const N: usize> Trajectory<[f64; N], [f64; N]> for Axes<T, N> {
    fn get_position(&self, t: f64) -> [f64; N] {
        array::from_fn(|i| self.axes[i].get_position(t))
    }

    fn get_velocity(&self, t: f64) -> [f64; N] {
        array::from_fn(|i| self.axes[i].get_velocity(t))
    }

    fn get_acceleration(&self, t: f64) -> [f64; N] {
        array::from_fn(|i| self.axes[i].get_acceleration(t))
    }

    fn get_jerk(&self, t: f64) -> [f64; N] {
        array::from_fn(|i| self.axes[i].get_jerk(t))
    }

    fn get_total_runtime(&self) -> f64 {
        self.axes
            .iter()
            .map(|a| a.get_total_runtime())
            .fold(0., f64::max)
    }

    fn get_final_destination(&self) -> [f64; N] {
        array::from_fn(|i| self.axes[i].get_final_destination())
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        // every axis of a request shares its knots, report each one once
        let mut sections: Vec<f64> = self
            .axes
            .iter()
            .flat_map(|a| a.get_time_sections())
            .collect();
        sections.sort_by(f64::total_cmp);
        sections.dedup();
        sections.into_iter()
    }
}

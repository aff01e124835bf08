use crate::config::AnalysisConfig;
use crate::data::model::Dataset;
use crate::report::{render, RenderedOutput};

// ---------------------------------------------------------------------------
// Row-count control
// ---------------------------------------------------------------------------

/// The single integer control driving the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControl {
    pub value: usize,
    pub min: usize,
    pub max: usize,
    pub step: usize,
}

impl RowControl {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        RowControl {
            value: config.control_default,
            min: config.control_min,
            max: config.control_max(),
            step: config.control_step,
        }
    }

    /// Snap `value` into the control's bounds and onto its step grid.
    pub fn snap(&self, value: usize) -> usize {
        let clamped = value.clamp(self.min, self.max);
        let steps = (clamped - self.min) / self.step;
        self.min + steps * self.step
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AnalysisConfig,

    /// Generated once at startup, never written afterwards.
    pub dataset: Dataset,

    pub control: RowControl,

    /// Output for the current control value.
    pub output: RenderedOutput,

    /// Bumped on every render so the UI can refresh derived textures.
    pub revision: u64,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

/// A one-line message for the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl AppState {
    /// Build the state and render the default window.
    pub fn new(dataset: Dataset, config: AnalysisConfig) -> Self {
        let control = RowControl::from_config(&config);
        let output = render(&dataset, control.value, &config);
        Self {
            config,
            dataset,
            control,
            output,
            revision: 0,
            status_message: None,
        }
    }

    /// Apply a new control value. Re-renders synchronously only when the
    /// snapped value differs from the current one; returns whether it did.
    pub fn set_rows(&mut self, value: usize) -> bool {
        let value = self.control.snap(value);
        if value == self.control.value {
            return false;
        }
        self.control.value = value;
        self.output = render(&self.dataset, value, &self.config);
        self.revision += 1;
        true
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            is_error: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::generate;

    fn state() -> AppState {
        let cfg = AnalysisConfig::default();
        let ds = generate(&cfg).expect("generates");
        AppState::new(ds, cfg)
    }

    #[test]
    fn starts_at_default_window() {
        let st = state();
        assert_eq!(st.control.value, 20);
        assert_eq!((st.control.min, st.control.max, st.control.step), (5, 74, 1));
        assert_eq!(st.output.rows_used, 20);
        assert_eq!(st.revision, 0);
    }

    #[test]
    fn each_change_renders_once() {
        let mut st = state();
        assert!(st.set_rows(21));
        assert_eq!(st.revision, 1);
        assert_eq!(st.output.rows_used, 21);
        assert!(!st.set_rows(21));
        assert_eq!(st.revision, 1);
        assert!(st.set_rows(50));
        assert!(st.set_rows(49));
        assert_eq!(st.revision, 3);
        assert_eq!(st.output.rows_used, 49);
    }

    #[test]
    fn control_clamps_to_its_bounds() {
        let mut st = state();
        st.set_rows(2);
        assert_eq!(st.control.value, 5);
        assert_eq!(st.output.rows_used, 5);
        st.set_rows(200);
        assert_eq!(st.control.value, 74);
        assert_eq!(st.output.subset.records(), st.dataset.records());
    }

    #[test]
    fn snap_follows_step_grid() {
        let ctl = RowControl {
            value: 10,
            min: 5,
            max: 74,
            step: 5,
        };
        assert_eq!(ctl.snap(12), 10);
        assert_eq!(ctl.snap(74), 70);
        assert_eq!(ctl.snap(0), 5);
    }

    #[test]
    fn rerender_matches_fresh_render() {
        let mut st = state();
        st.set_rows(33);
        let fresh = render(&st.dataset, 33, &st.config);
        assert_eq!(st.output, fresh);
    }
}

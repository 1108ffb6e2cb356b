//! Multi-step form navigation. Steps are numbered from 1.

/// Result of moving between steps: which step to hide, which to show, and
/// the new progress bar width in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTransition {
    pub hide: usize,
    pub show: usize,
    pub progress: f64,
}

pub fn next_step(current: usize, total: usize) -> Option<StepTransition> {
    (current >= 1 && current < total).then(|| StepTransition {
        hide: current,
        show: current + 1,
        progress: progress_percent(current + 1, total),
    })
}

pub fn prev_step(current: usize, total: usize) -> Option<StepTransition> {
    (current > 1 && current <= total).then(|| StepTransition {
        hide: current,
        show: current - 1,
        progress: progress_percent(current - 1, total),
    })
}

pub fn progress_percent(step: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    step as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_moves_forward_until_last_step() {
        assert_eq!(
            next_step(1, 4),
            Some(StepTransition {
                hide: 1,
                show: 2,
                progress: 50.0
            })
        );
        assert_eq!(next_step(4, 4), None);
    }

    #[test]
    fn prev_stops_at_first_step() {
        let t = prev_step(3, 4).expect("step 3 can go back");
        assert_eq!((t.hide, t.show), (3, 2));
        assert_eq!(t.progress, 50.0);
        assert_eq!(prev_step(1, 4), None);
    }

    #[test]
    fn progress_is_proportional() {
        assert_eq!(progress_percent(1, 4), 25.0);
        assert_eq!(progress_percent(3, 3), 100.0);
        assert_eq!(progress_percent(1, 0), 0.0);
    }
}

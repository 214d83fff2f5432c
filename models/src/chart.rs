use derive_more::Display;

use crate::build::BuildTestCounts;
use crate::message::MessageId;

/// Fixed palette of the status charts. Displays as a CSS hex color.
#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash, Display)]
pub enum Color {
    #[display("#53D07C")]
    Green,
    #[display("#E15739")]
    Red,
    #[display("#696969")]
    DimGray,
    #[display("#BFBFBF")]
    Gray,
    #[display("#FFD27C")]
    Yellow,
    #[display("#11B3E6")]
    Blue,
}

#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub struct ChartSlice {
    pub value: u64,
    pub label: MessageId,
    pub color: Color,
}

impl ChartSlice {
    fn new(value: u64, label: MessageId, color: Color) -> Self {
        ChartSlice {
            value,
            label,
            color,
        }
    }
}

/// Title of the build status chart.
pub const BUILD_STATUS_TITLE: MessageId = MessageId::TestStatus;

/// Slices in the order success, error, skipped, missed, failed, done.
pub fn status_slices(counts: &BuildTestCounts) -> [ChartSlice; 6] {
    [
        ChartSlice::new(counts.pass_tests, MessageId::TestSuccess, Color::Green),
        ChartSlice::new(counts.error_tests, MessageId::TestError, Color::Red),
        ChartSlice::new(counts.skip_tests, MessageId::TestSkipped, Color::DimGray),
        ChartSlice::new(counts.miss_tests, MessageId::TestMiss, Color::Gray),
        ChartSlice::new(counts.fail_tests, MessageId::TestFail, Color::Yellow),
        ChartSlice::new(counts.done_tests, MessageId::TestDone, Color::Blue),
    ]
}

pub fn has_data(slices: &[ChartSlice]) -> bool {
    slices.iter().any(|slice| slice.value > 0)
}

/// The slices to draw, or `None` when every count is zero and no chart should be shown.
pub fn build_status_chart(counts: &BuildTestCounts) -> Option<[ChartSlice; 6]> {
    let slices = status_slices(counts);
    has_data(&slices).then_some(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_render_no_chart() {
        assert_eq!(build_status_chart(&BuildTestCounts::default()), None);

        let from_nulls: BuildTestCounts = serde_json::from_str(
            r#"{"pass_tests": null, "error_tests": 0, "done_tests": null}"#,
        )
        .unwrap();
        assert_eq!(build_status_chart(&from_nulls), None);
    }

    #[test]
    fn single_positive_count_renders_all_six_slices_in_order() {
        let counts = BuildTestCounts {
            miss_tests: 2,
            ..Default::default()
        };

        let slices = build_status_chart(&counts).expect("chart should render");

        let labels: Vec<MessageId> = slices.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                MessageId::TestSuccess,
                MessageId::TestError,
                MessageId::TestSkipped,
                MessageId::TestMiss,
                MessageId::TestFail,
                MessageId::TestDone,
            ]
        );
        let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![0, 0, 0, 2, 0, 0]);
    }

    #[test]
    fn slices_carry_fixed_colors_and_input_values() {
        let counts = BuildTestCounts {
            pass_tests: 1,
            error_tests: 2,
            skip_tests: 3,
            miss_tests: 4,
            fail_tests: 5,
            done_tests: 6,
        };

        let slices = status_slices(&counts);

        let colors: Vec<Color> = slices.iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![
                Color::Green,
                Color::Red,
                Color::DimGray,
                Color::Gray,
                Color::Yellow,
                Color::Blue,
            ]
        );
        let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(slices[0].label.key(), "buildAccordion.testSuccess");
    }

    #[test]
    fn colors_display_as_css_hex() {
        assert_eq!(Color::Green.to_string(), "#53D07C");
        assert_eq!(Color::DimGray.to_string(), "#696969");
    }
}

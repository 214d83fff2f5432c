use gloo_utils::document;
use log::info;
use models::chart::{build_status_chart, ChartSlice, BUILD_STATUS_TITLE};
use models::{BuildTestCounts, MessageId};
use plotly::common::Marker;
use plotly::{Bar, Layout, Plot};
use yew::prelude::*;

use crate::i18n::{english, FormattedMessage};

fn chart_plot(slices: &[ChartSlice]) -> Plot {
    let labels: Vec<&str> = slices.iter().map(|s| english(s.label)).collect();
    let values: Vec<u64> = slices.iter().map(|s| s.value).collect();
    let colors: Vec<String> = slices.iter().map(|s| s.color.to_string()).collect();

    let mut plot = Plot::new();
    plot.add_trace(
        Bar::new(labels, values)
            .marker(Marker::new().color_array(colors))
            .show_legend(false),
    );
    plot.set_layout(Layout::new().height(260));
    plot
}

#[derive(Properties, PartialEq)]
pub struct StatusChartProps {
    /// Id of the element plotly draws into; must be unique on the page.
    pub plot_id: AttrValue,
    pub title: MessageId,
    pub slices: Vec<ChartSlice>,
}

#[function_component(StatusChart)]
pub fn status_chart(props: &StatusChartProps) -> Html {
    let plot_id = props.plot_id.clone();
    let slices = props.slices.clone();

    let p = yew_hooks::use_async::<_, _, ()>({
        let plot_id = plot_id.clone();
        let slices = slices.clone();
        async move {
            if document().get_element_by_id(&plot_id).is_some() {
                info!("Plotting {}", plot_id);
                plotly::bindings::new_plot(&plot_id, &chart_plot(&slices)).await;
            }
            Ok(())
        }
    });

    use_effect_with((plot_id.clone(), slices), move |_| {
        p.run();
        || ()
    });

    html! {
        <div class="status-chart">
            <h4><FormattedMessage id={props.title} /></h4>
            <div id={plot_id}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BuildStatusChartProps {
    pub build_id: AttrValue,
    pub counts: BuildTestCounts,
}

/// Status chart of one build; renders nothing when every count is zero.
#[function_component(BuildStatusChart)]
pub fn build_status_chart_view(props: &BuildStatusChartProps) -> Html {
    let slices = use_memo(props.counts, build_status_chart);

    match *slices {
        Some(ref slices) => html! {
            <StatusChart
                plot_id={format!("status-chart-{}", props.build_id)}
                title={BUILD_STATUS_TITLE}
                slices={slices.to_vec()}
            />
        },
        None => html!(),
    }
}

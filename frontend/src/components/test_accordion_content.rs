use models::{MessageId, TestItem};
use yew::prelude::*;

use crate::i18n::FormattedMessage;

#[derive(Properties, PartialEq)]
pub struct TestAccordionContentProps {
    pub test: TestItem,
}

#[function_component(TestAccordionContent)]
pub fn test_accordion_content(props: &TestAccordionContentProps) -> Html {
    let test = &props.test;
    html! {
        <table class="pure-table">
            <tbody>
                <tr>
                    <th><FormattedMessage id={MessageId::TestPath} /></th>
                    <td>{ test.path.clone() }</td>
                </tr>
                <tr>
                    <th><FormattedMessage id={MessageId::TestResult} /></th>
                    <td>{ test.status.clone() }</td>
                </tr>
                <tr>
                    <th><FormattedMessage id={MessageId::TestDuration} /></th>
                    <td>{ test.duration_ms.map(|ms| format!("{} ms", ms)).unwrap_or("---".into()) }</td>
                </tr>
            </tbody>
        </table>
    }
}

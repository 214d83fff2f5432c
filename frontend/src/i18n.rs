use models::MessageId;
use yew::prelude::*;

/// English text of a message.
pub fn english(id: MessageId) -> &'static str {
    match id {
        MessageId::TestStatus => "Test status",
        MessageId::TestSuccess => "Success",
        MessageId::TestError => "Error",
        MessageId::TestSkipped => "Skipped",
        MessageId::TestMiss => "Missed",
        MessageId::TestFail => "Failed",
        MessageId::TestDone => "Done",
        MessageId::KernelImage => "Kernel Image",
        MessageId::KernelConfig => "Kernel Config",
        MessageId::KernelConfigPath => "kernel/config",
        MessageId::Dtb => "Dtb",
        MessageId::Dtbs => "dtbs",
        MessageId::BuildLogs => "Build Logs",
        MessageId::Logs => "logs",
        MessageId::SystemMap => "System Map",
        MessageId::SystemMapPath => "System.map",
        MessageId::Modules => "Modules",
        MessageId::ModulesZip => "modules.tar.xz",
        MessageId::ShowMore => "Show more",
        MessageId::GlobalError => "Error loading data",
        MessageId::GlobalLoading => "Loading...",
        MessageId::GlobalNotFound => "This page cannot be found",
        MessageId::TreeListTitle => "Trees",
        MessageId::TreeBuilds => "Builds",
        MessageId::TreeTests => "Tests",
        MessageId::TreeNoItems => "Nothing to show",
        MessageId::FilterAll => "All",
        MessageId::FilterValid => "Valid",
        MessageId::FilterInvalid => "Invalid",
        MessageId::BuildDetailsTitle => "Build details",
        MessageId::Architecture => "Architecture",
        MessageId::Compiler => "Compiler",
        MessageId::Config => "Config",
        MessageId::Date => "Date",
        MessageId::BuildStatus => "Status",
        MessageId::Valid => "Valid",
        MessageId::Invalid => "Invalid",
        MessageId::TestPath => "Path",
        MessageId::TestResult => "Status",
        MessageId::TestDuration => "Duration",
    }
}

#[derive(Properties, PartialEq)]
pub struct FormattedMessageProps {
    pub id: MessageId,
}

#[function_component(FormattedMessage)]
pub fn formatted_message(props: &FormattedMessageProps) -> Html {
    html! { <span title={props.id.key()}>{ english(props.id) }</span> }
}

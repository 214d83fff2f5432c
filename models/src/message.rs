use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Keys of the localized messages the dashboard renders.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy, Eq, Hash, Display)]
pub enum MessageId {
    #[display("buildAccordion.testStatus")]
    TestStatus,
    #[display("buildAccordion.testSuccess")]
    TestSuccess,
    #[display("buildAccordion.testError")]
    TestError,
    #[display("buildAccordion.testSkipped")]
    TestSkipped,
    #[display("buildAccordion.testMiss")]
    TestMiss,
    #[display("buildAccordion.testFail")]
    TestFail,
    #[display("buildAccordion.testDone")]
    TestDone,
    #[display("buildAccordion.kernelImage")]
    KernelImage,
    #[display("buildAccordion.kernelConfig")]
    KernelConfig,
    #[display("buildAccordion.kernelConfigPath")]
    KernelConfigPath,
    #[display("buildAccordion.dtb")]
    Dtb,
    #[display("buildAccordion.dtbs")]
    Dtbs,
    #[display("buildAccordion.buildLogs")]
    BuildLogs,
    #[display("buildAccordion.logs")]
    Logs,
    #[display("buildAccordion.systemMap")]
    SystemMap,
    #[display("buildAccordion.systemMapPath")]
    SystemMapPath,
    #[display("buildAccordion.modules")]
    Modules,
    #[display("buildAccordion.modulesZip")]
    ModulesZip,
    #[display("buildAccordion.showMore")]
    ShowMore,
    #[display("global.error")]
    GlobalError,
    #[display("global.loading")]
    GlobalLoading,
    #[display("global.notFound")]
    GlobalNotFound,
    #[display("treeList.title")]
    TreeListTitle,
    #[display("treeDetails.builds")]
    TreeBuilds,
    #[display("treeDetails.tests")]
    TreeTests,
    #[display("treeDetails.noItems")]
    TreeNoItems,
    #[display("filter.all")]
    FilterAll,
    #[display("filter.valid")]
    FilterValid,
    #[display("filter.invalid")]
    FilterInvalid,
    #[display("buildDetails.title")]
    BuildDetailsTitle,
    #[display("buildDetails.architecture")]
    Architecture,
    #[display("buildDetails.compiler")]
    Compiler,
    #[display("buildDetails.config")]
    Config,
    #[display("buildDetails.date")]
    Date,
    #[display("buildDetails.status")]
    BuildStatus,
    #[display("buildDetails.valid")]
    Valid,
    #[display("buildDetails.invalid")]
    Invalid,
    #[display("testDetails.path")]
    TestPath,
    #[display("testDetails.status")]
    TestResult,
    #[display("testDetails.duration")]
    TestDuration,
}

impl MessageId {
    pub fn key(&self) -> String {
        self.to_string()
    }
}

// ==========================================
// 车辆保养引擎 - 引擎层
// ==========================================
// 数据流（单向,纯函数）:
// 存储快照 → MileageProjector → RuleEvaluator(逐规则) → ActionAggregator
// ==========================================
// 红线: 引擎不写任何存储,所有判定必须输出 reason
// 红线: now 由调用方传入,同一轮判定只使用同一时刻
// ==========================================

pub mod action_sorter;
pub mod aggregator;
pub mod default_rules;
pub mod log_matcher;
pub mod mileage_projector;
pub mod rule_evaluator;
pub mod schedule_view;

// 重导出核心引擎
pub use action_sorter::ActionSorter;
pub use aggregator::ActionAggregator;
pub use default_rules::DefaultRuleCatalog;
pub use log_matcher::{Baseline, LogMatcher, MatchTier, ResolvedBaselines};
pub use mileage_projector::MileageProjector;
pub use rule_evaluator::RuleEvaluator;
pub use schedule_view::{
    FreshnessGrade, ScheduleBuckets, ScheduleView, ServiceSummary, SupplyEntry, SupplyGroup,
    TimelineGroup,
};

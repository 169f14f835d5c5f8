pub mod constants;

mod context;
mod filter;
mod headers;
mod origin;
mod result;
mod rule;
mod ruleset;

pub use context::RequestContext;
pub use filter::CorsFilter;
pub use headers::{Headers, merge_vary};
pub use origin::ResolvedOrigin;
pub use result::{CorsDecision, PreflightResult, SimpleResult};
pub use rule::{CorsRule, RulePolicy};
pub use ruleset::{RuleSet, RuleSetError};

mod accent;
mod bar;
mod components;
mod delim;
mod fraction;
mod function;
mod group_char;
mod run;
mod script;
mod unsupported;

pub use accent::AccentHandler;
pub use bar::BarHandler;
pub use components::ComponentHandler;
pub use delim::DelimiterHandler;
pub use fraction::FractionHandler;
pub use function::{FunctionHandler, FunctionNameHandler};
pub use group_char::GroupCharHandler;
pub use run::RunHandler;
pub use script::{ScriptHandler, SubscriptElementHandler, SuperscriptElementHandler};
pub use unsupported::UnsupportedHandler;

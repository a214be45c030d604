//! Target language backends

mod c;
mod cpp;
mod javascript;
mod pascal;
mod python;
mod qbasic;
mod rust;

pub use c::CEmitter;
pub use cpp::CppEmitter;
pub use javascript::{JsBaseEmitter, JsDenoEmitter, JsNodeEmitter, JsWebEmitter};
pub use pascal::PascalEmitter;
pub use python::PythonEmitter;
pub use qbasic::QBasicEmitter;
pub use rust::RustEmitter;

mod lexer;
mod object;
mod vertex;

pub use lexer::*;
pub use object::*;
pub use vertex::*;

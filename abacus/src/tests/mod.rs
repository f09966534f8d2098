
// Parser tests
mod postfix;

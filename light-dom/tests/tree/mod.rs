mod book;
mod interning;

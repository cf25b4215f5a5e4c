mod combinators;
mod compare;
mod deep;
mod equals;
mod folding;
mod strings;
mod structural;

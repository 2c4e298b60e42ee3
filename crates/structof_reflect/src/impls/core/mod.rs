mod function;
mod option;

// fn main not required
mod form;

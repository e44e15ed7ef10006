pub mod letters;

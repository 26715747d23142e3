mod classification;
mod common;
mod matching;

pub mod vowels;

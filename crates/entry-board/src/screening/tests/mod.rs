mod common;
mod posting;

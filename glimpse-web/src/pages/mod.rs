mod gallery;

pub use gallery::Gallery;

pub mod polyline;

pub use polyline::{
    polyline_length, sample_at_distance, split_at_distance, trim_from_end, trim_from_start,
};

//! Conversion between 1d pixel indices and 2d (row, column) detector indices.
//!
//! Rows run along the detector height and vary slowest.

use std::ops::{Add, Div, Mul, Rem};

#[allow(non_camel_case_types)] pub type Index1_u = usize;
#[allow(non_camel_case_types)] pub type Index2_u = [usize; 2];

pub fn index2_to_1<T>([row, col]: [T; 2], width: T) -> T
where
    T: Mul<Output = T> + Add<Output = T>
{
    row * width + col
}

pub fn index1_to_2<T>(i: T, width: T) -> [T; 2]
where
    T: Div<Output = T> + Rem<Output = T> + Copy
{
    [i / width, i % width]
}

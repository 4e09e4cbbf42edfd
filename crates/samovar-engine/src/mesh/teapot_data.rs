//! Baked teapot mesh tables.
//!
//! Five parallel per-vertex attribute arrays (three floats per vertex
//! each) plus a triangle-list index table. Generated offline; treated
//! as an opaque asset by the rest of the crate.

#![allow(clippy::all)]

pub static TEAPOT_POSITIONS: [f32; 3528] = [
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000,
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000,
    0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000,
    -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000,
    0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000,
    0.0000, 0.0000, -0.0000, -0.0000, 0.0000, -0.0000, -0.0000, 0.0000, -0.0000, -0.0000, 0.0000,
    -0.0000, -0.0000, 0.0000, -0.0000, -0.0000, 0.0000, -0.0000, -0.0000, 0.0000, -0.0000,
    -0.0000, 0.0000, -0.0000, -0.0000, 0.0000, -0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000,
    0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000,
    0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 0.0000, -0.0000, 0.0000, 8.0000,
    0.0000, 0.0000, 7.8785, 1.3892, 0.0000, 7.5175, 2.7362, 0.0000, 6.9282, 4.0000, 0.0000,
    6.1284, 5.1423, 0.0000, 5.1423, 6.1284, 0.0000, 4.0000, 6.9282, 0.0000, 2.7362, 7.5175,
    0.0000, 1.3892, 7.8785, 0.0000, 0.0000, 8.0000, 0.0000, -1.3892, 7.8785, 0.0000, -2.7362,
    7.5175, 0.0000, -4.0000, 6.9282, 0.0000, -5.1423, 6.1284, 0.0000, -6.1284, 5.1423, 0.0000,
    -6.9282, 4.0000, 0.0000, -7.5175, 2.7362, 0.0000, -7.8785, 1.3892, 0.0000, -8.0000, 0.0000,
    0.0000, -7.8785, -1.3892, 0.0000, -7.5175, -2.7362, 0.0000, -6.9282, -4.0000, 0.0000, -6.1284,
    -5.1423, 0.0000, -5.1423, -6.1284, 0.0000, -4.0000, -6.9282, 0.0000, -2.7362, -7.5175, 0.0000,
    -1.3892, -7.8785, 0.0000, -0.0000, -8.0000, 0.0000, 1.3892, -7.8785, 0.0000, 2.7362, -7.5175,
    0.0000, 4.0000, -6.9282, 0.0000, 5.1423, -6.1284, 0.0000, 6.1284, -5.1423, 0.0000, 6.9282,
    -4.0000, 0.0000, 7.5175, -2.7362, 0.0000, 7.8785, -1.3892, 0.0000, 14.0000, 0.0000, 0.5000,
    13.7873, 2.4311, 0.5000, 13.1557, 4.7883, 0.5000, 12.1244, 7.0000, 0.5000, 10.7246, 8.9990,
    0.5000, 8.9990, 10.7246, 0.5000, 7.0000, 12.1244, 0.5000, 4.7883, 13.1557, 0.5000, 2.4311,
    13.7873, 0.5000, 0.0000, 14.0000, 0.5000, -2.4311, 13.7873, 0.5000, -4.7883, 13.1557, 0.5000,
    -7.0000, 12.1244, 0.5000, -8.9990, 10.7246, 0.5000, -10.7246, 8.9990, 0.5000, -12.1244,
    7.0000, 0.5000, -13.1557, 4.7883, 0.5000, -13.7873, 2.4311, 0.5000, -14.0000, 0.0000, 0.5000,
    -13.7873, -2.4311, 0.5000, -13.1557, -4.7883, 0.5000, -12.1244, -7.0000, 0.5000, -10.7246,
    -8.9990, 0.5000, -8.9990, -10.7246, 0.5000, -7.0000, -12.1244, 0.5000, -4.7883, -13.1557,
    0.5000, -2.4311, -13.7873, 0.5000, -0.0000, -14.0000, 0.5000, 2.4311, -13.7873, 0.5000,
    4.7883, -13.1557, 0.5000, 7.0000, -12.1244, 0.5000, 8.9990, -10.7246, 0.5000, 10.7246,
    -8.9990, 0.5000, 12.1244, -7.0000, 0.5000, 13.1557, -4.7883, 0.5000, 13.7873, -2.4311, 0.5000,
    17.0000, 0.0000, 2.0000, 16.7417, 2.9520, 2.0000, 15.9748, 5.8143, 2.0000, 14.7224, 8.5000,
    2.0000, 13.0228, 10.9274, 2.0000, 10.9274, 13.0228, 2.0000, 8.5000, 14.7224, 2.0000, 5.8143,
    15.9748, 2.0000, 2.9520, 16.7417, 2.0000, 0.0000, 17.0000, 2.0000, -2.9520, 16.7417, 2.0000,
    -5.8143, 15.9748, 2.0000, -8.5000, 14.7224, 2.0000, -10.9274, 13.0228, 2.0000, -13.0228,
    10.9274, 2.0000, -14.7224, 8.5000, 2.0000, -15.9748, 5.8143, 2.0000, -16.7417, 2.9520, 2.0000,
    -17.0000, 0.0000, 2.0000, -16.7417, -2.9520, 2.0000, -15.9748, -5.8143, 2.0000, -14.7224,
    -8.5000, 2.0000, -13.0228, -10.9274, 2.0000, -10.9274, -13.0228, 2.0000, -8.5000, -14.7224,
    2.0000, -5.8143, -15.9748, 2.0000, -2.9520, -16.7417, 2.0000, -0.0000, -17.0000, 2.0000,
    2.9520, -16.7417, 2.0000, 5.8143, -15.9748, 2.0000, 8.5000, -14.7224, 2.0000, 10.9274,
    -13.0228, 2.0000, 13.0228, -10.9274, 2.0000, 14.7224, -8.5000, 2.0000, 15.9748, -5.8143,
    2.0000, 16.7417, -2.9520, 2.0000, 19.0000, 0.0000, 5.0000, 18.7113, 3.2993, 5.0000, 17.8542,
    6.4984, 5.0000, 16.4545, 9.5000, 5.0000, 14.5548, 12.2130, 5.0000, 12.2130, 14.5548, 5.0000,
    9.5000, 16.4545, 5.0000, 6.4984, 17.8542, 5.0000, 3.2993, 18.7113, 5.0000, 0.0000, 19.0000,
    5.0000, -3.2993, 18.7113, 5.0000, -6.4984, 17.8542, 5.0000, -9.5000, 16.4545, 5.0000,
    -12.2130, 14.5548, 5.0000, -14.5548, 12.2130, 5.0000, -16.4545, 9.5000, 5.0000, -17.8542,
    6.4984, 5.0000, -18.7113, 3.2993, 5.0000, -19.0000, 0.0000, 5.0000, -18.7113, -3.2993, 5.0000,
    -17.8542, -6.4984, 5.0000, -16.4545, -9.5000, 5.0000, -14.5548, -12.2130, 5.0000, -12.2130,
    -14.5548, 5.0000, -9.5000, -16.4545, 5.0000, -6.4984, -17.8542, 5.0000, -3.2993, -18.7113,
    5.0000, -0.0000, -19.0000, 5.0000, 3.2993, -18.7113, 5.0000, 6.4984, -17.8542, 5.0000, 9.5000,
    -16.4545, 5.0000, 12.2130, -14.5548, 5.0000, 14.5548, -12.2130, 5.0000, 16.4545, -9.5000,
    5.0000, 17.8542, -6.4984, 5.0000, 18.7113, -3.2993, 5.0000, 20.0000, 0.0000, 9.0000, 19.6962,
    3.4730, 9.0000, 18.7939, 6.8404, 9.0000, 17.3205, 10.0000, 9.0000, 15.3209, 12.8558, 9.0000,
    12.8558, 15.3209, 9.0000, 10.0000, 17.3205, 9.0000, 6.8404, 18.7939, 9.0000, 3.4730, 19.6962,
    9.0000, 0.0000, 20.0000, 9.0000, -3.4730, 19.6962, 9.0000, -6.8404, 18.7939, 9.0000, -10.0000,
    17.3205, 9.0000, -12.8558, 15.3209, 9.0000, -15.3209, 12.8558, 9.0000, -17.3205, 10.0000,
    9.0000, -18.7939, 6.8404, 9.0000, -19.6962, 3.4730, 9.0000, -20.0000, 0.0000, 9.0000,
    -19.6962, -3.4730, 9.0000, -18.7939, -6.8404, 9.0000, -17.3205, -10.0000, 9.0000, -15.3209,
    -12.8558, 9.0000, -12.8558, -15.3209, 9.0000, -10.0000, -17.3205, 9.0000, -6.8404, -18.7939,
    9.0000, -3.4730, -19.6962, 9.0000, -0.0000, -20.0000, 9.0000, 3.4730, -19.6962, 9.0000,
    6.8404, -18.7939, 9.0000, 10.0000, -17.3205, 9.0000, 12.8558, -15.3209, 9.0000, 15.3209,
    -12.8558, 9.0000, 17.3205, -10.0000, 9.0000, 18.7939, -6.8404, 9.0000, 19.6962, -3.4730,
    9.0000, 20.0000, 0.0000, 13.0000, 19.6962, 3.4730, 13.0000, 18.7939, 6.8404, 13.0000, 17.3205,
    10.0000, 13.0000, 15.3209, 12.8558, 13.0000, 12.8558, 15.3209, 13.0000, 10.0000, 17.3205,
    13.0000, 6.8404, 18.7939, 13.0000, 3.4730, 19.6962, 13.0000, 0.0000, 20.0000, 13.0000,
    -3.4730, 19.6962, 13.0000, -6.8404, 18.7939, 13.0000, -10.0000, 17.3205, 13.0000, -12.8558,
    15.3209, 13.0000, -15.3209, 12.8558, 13.0000, -17.3205, 10.0000, 13.0000, -18.7939, 6.8404,
    13.0000, -19.6962, 3.4730, 13.0000, -20.0000, 0.0000, 13.0000, -19.6962, -3.4730, 13.0000,
    -18.7939, -6.8404, 13.0000, -17.3205, -10.0000, 13.0000, -15.3209, -12.8558, 13.0000,
    -12.8558, -15.3209, 13.0000, -10.0000, -17.3205, 13.0000, -6.8404, -18.7939, 13.0000, -3.4730,
    -19.6962, 13.0000, -0.0000, -20.0000, 13.0000, 3.4730, -19.6962, 13.0000, 6.8404, -18.7939,
    13.0000, 10.0000, -17.3205, 13.0000, 12.8558, -15.3209, 13.0000, 15.3209, -12.8558, 13.0000,
    17.3205, -10.0000, 13.0000, 18.7939, -6.8404, 13.0000, 19.6962, -3.4730, 13.0000, 18.5000,
    0.0000, 17.0000, 18.2189, 3.2125, 17.0000, 17.3843, 6.3274, 17.0000, 16.0215, 9.2500, 17.0000,
    14.1718, 11.8916, 17.0000, 11.8916, 14.1718, 17.0000, 9.2500, 16.0215, 17.0000, 6.3274,
    17.3843, 17.0000, 3.2125, 18.2189, 17.0000, 0.0000, 18.5000, 17.0000, -3.2125, 18.2189,
    17.0000, -6.3274, 17.3843, 17.0000, -9.2500, 16.0215, 17.0000, -11.8916, 14.1718, 17.0000,
    -14.1718, 11.8916, 17.0000, -16.0215, 9.2500, 17.0000, -17.3843, 6.3274, 17.0000, -18.2189,
    3.2125, 17.0000, -18.5000, 0.0000, 17.0000, -18.2189, -3.2125, 17.0000, -17.3843, -6.3274,
    17.0000, -16.0215, -9.2500, 17.0000, -14.1718, -11.8916, 17.0000, -11.8916, -14.1718, 17.0000,
    -9.2500, -16.0215, 17.0000, -6.3274, -17.3843, 17.0000, -3.2125, -18.2189, 17.0000, -0.0000,
    -18.5000, 17.0000, 3.2125, -18.2189, 17.0000, 6.3274, -17.3843, 17.0000, 9.2500, -16.0215,
    17.0000, 11.8916, -14.1718, 17.0000, 14.1718, -11.8916, 17.0000, 16.0215, -9.2500, 17.0000,
    17.3843, -6.3274, 17.0000, 18.2189, -3.2125, 17.0000, 16.0000, 0.0000, 20.5000, 15.7569,
    2.7784, 20.5000, 15.0351, 5.4723, 20.5000, 13.8564, 8.0000, 20.5000, 12.2567, 10.2846,
    20.5000, 10.2846, 12.2567, 20.5000, 8.0000, 13.8564, 20.5000, 5.4723, 15.0351, 20.5000,
    2.7784, 15.7569, 20.5000, 0.0000, 16.0000, 20.5000, -2.7784, 15.7569, 20.5000, -5.4723,
    15.0351, 20.5000, -8.0000, 13.8564, 20.5000, -10.2846, 12.2567, 20.5000, -12.2567, 10.2846,
    20.5000, -13.8564, 8.0000, 20.5000, -15.0351, 5.4723, 20.5000, -15.7569, 2.7784, 20.5000,
    -16.0000, 0.0000, 20.5000, -15.7569, -2.7784, 20.5000, -15.0351, -5.4723, 20.5000, -13.8564,
    -8.0000, 20.5000, -12.2567, -10.2846, 20.5000, -10.2846, -12.2567, 20.5000, -8.0000, -13.8564,
    20.5000, -5.4723, -15.0351, 20.5000, -2.7784, -15.7569, 20.5000, -0.0000, -16.0000, 20.5000,
    2.7784, -15.7569, 20.5000, 5.4723, -15.0351, 20.5000, 8.0000, -13.8564, 20.5000, 10.2846,
    -12.2567, 20.5000, 12.2567, -10.2846, 20.5000, 13.8564, -8.0000, 20.5000, 15.0351, -5.4723,
    20.5000, 15.7569, -2.7784, 20.5000, 13.5000, 0.0000, 23.0000, 13.2949, 2.3443, 23.0000,
    12.6859, 4.6173, 23.0000, 11.6913, 6.7500, 23.0000, 10.3416, 8.6776, 23.0000, 8.6776, 10.3416,
    23.0000, 6.7500, 11.6913, 23.0000, 4.6173, 12.6859, 23.0000, 2.3443, 13.2949, 23.0000, 0.0000,
    13.5000, 23.0000, -2.3443, 13.2949, 23.0000, -4.6173, 12.6859, 23.0000, -6.7500, 11.6913,
    23.0000, -8.6776, 10.3416, 23.0000, -10.3416, 8.6776, 23.0000, -11.6913, 6.7500, 23.0000,
    -12.6859, 4.6173, 23.0000, -13.2949, 2.3443, 23.0000, -13.5000, 0.0000, 23.0000, -13.2949,
    -2.3443, 23.0000, -12.6859, -4.6173, 23.0000, -11.6913, -6.7500, 23.0000, -10.3416, -8.6776,
    23.0000, -8.6776, -10.3416, 23.0000, -6.7500, -11.6913, 23.0000, -4.6173, -12.6859, 23.0000,
    -2.3443, -13.2949, 23.0000, -0.0000, -13.5000, 23.0000, 2.3443, -13.2949, 23.0000, 4.6173,
    -12.6859, 23.0000, 6.7500, -11.6913, 23.0000, 8.6776, -10.3416, 23.0000, 10.3416, -8.6776,
    23.0000, 11.6913, -6.7500, 23.0000, 12.6859, -4.6173, 23.0000, 13.2949, -2.3443, 23.0000,
    13.0000, 0.0000, 24.0000, 12.8025, 2.2574, 24.0000, 12.2160, 4.4463, 24.0000, 11.2583, 6.5000,
    24.0000, 9.9586, 8.3562, 24.0000, 8.3562, 9.9586, 24.0000, 6.5000, 11.2583, 24.0000, 4.4463,
    12.2160, 24.0000, 2.2574, 12.8025, 24.0000, 0.0000, 13.0000, 24.0000, -2.2574, 12.8025,
    24.0000, -4.4463, 12.2160, 24.0000, -6.5000, 11.2583, 24.0000, -8.3562, 9.9586, 24.0000,
    -9.9586, 8.3562, 24.0000, -11.2583, 6.5000, 24.0000, -12.2160, 4.4463, 24.0000, -12.8025,
    2.2574, 24.0000, -13.0000, 0.0000, 24.0000, -12.8025, -2.2574, 24.0000, -12.2160, -4.4463,
    24.0000, -11.2583, -6.5000, 24.0000, -9.9586, -8.3562, 24.0000, -8.3562, -9.9586, 24.0000,
    -6.5000, -11.2583, 24.0000, -4.4463, -12.2160, 24.0000, -2.2574, -12.8025, 24.0000, -0.0000,
    -13.0000, 24.0000, 2.2574, -12.8025, 24.0000, 4.4463, -12.2160, 24.0000, 6.5000, -11.2583,
    24.0000, 8.3562, -9.9586, 24.0000, 9.9586, -8.3562, 24.0000, 11.2583, -6.5000, 24.0000,
    12.2160, -4.4463, 24.0000, 12.8025, -2.2574, 24.0000, 14.0000, 0.0000, 25.0000, 13.7873,
    2.4311, 25.0000, 13.1557, 4.7883, 25.0000, 12.1244, 7.0000, 25.0000, 10.7246, 8.9990, 25.0000,
    8.9990, 10.7246, 25.0000, 7.0000, 12.1244, 25.0000, 4.7883, 13.1557, 25.0000, 2.4311, 13.7873,
    25.0000, 0.0000, 14.0000, 25.0000, -2.4311, 13.7873, 25.0000, -4.7883, 13.1557, 25.0000,
    -7.0000, 12.1244, 25.0000, -8.9990, 10.7246, 25.0000, -10.7246, 8.9990, 25.0000, -12.1244,
    7.0000, 25.0000, -13.1557, 4.7883, 25.0000, -13.7873, 2.4311, 25.0000, -14.0000, 0.0000,
    25.0000, -13.7873, -2.4311, 25.0000, -13.1557, -4.7883, 25.0000, -12.1244, -7.0000, 25.0000,
    -10.7246, -8.9990, 25.0000, -8.9990, -10.7246, 25.0000, -7.0000, -12.1244, 25.0000, -4.7883,
    -13.1557, 25.0000, -2.4311, -13.7873, 25.0000, -0.0000, -14.0000, 25.0000, 2.4311, -13.7873,
    25.0000, 4.7883, -13.1557, 25.0000, 7.0000, -12.1244, 25.0000, 8.9990, -10.7246, 25.0000,
    10.7246, -8.9990, 25.0000, 12.1244, -7.0000, 25.0000, 13.1557, -4.7883, 25.0000, 13.7873,
    -2.4311, 25.0000, 12.0000, 0.0000, 26.0000, 11.8177, 2.0838, 26.0000, 11.2763, 4.1042,
    26.0000, 10.3923, 6.0000, 26.0000, 9.1925, 7.7135, 26.0000, 7.7135, 9.1925, 26.0000, 6.0000,
    10.3923, 26.0000, 4.1042, 11.2763, 26.0000, 2.0838, 11.8177, 26.0000, 0.0000, 12.0000,
    26.0000, -2.0838, 11.8177, 26.0000, -4.1042, 11.2763, 26.0000, -6.0000, 10.3923, 26.0000,
    -7.7135, 9.1925, 26.0000, -9.1925, 7.7135, 26.0000, -10.3923, 6.0000, 26.0000, -11.2763,
    4.1042, 26.0000, -11.8177, 2.0838, 26.0000, -12.0000, 0.0000, 26.0000, -11.8177, -2.0838,
    26.0000, -11.2763, -4.1042, 26.0000, -10.3923, -6.0000, 26.0000, -9.1925, -7.7135, 26.0000,
    -7.7135, -9.1925, 26.0000, -6.0000, -10.3923, 26.0000, -4.1042, -11.2763, 26.0000, -2.0838,
    -11.8177, 26.0000, -0.0000, -12.0000, 26.0000, 2.0838, -11.8177, 26.0000, 4.1042, -11.2763,
    26.0000, 6.0000, -10.3923, 26.0000, 7.7135, -9.1925, 26.0000, 9.1925, -7.7135, 26.0000,
    10.3923, -6.0000, 26.0000, 11.2763, -4.1042, 26.0000, 11.8177, -2.0838, 26.0000, 8.5000,
    0.0000, 28.0000, 8.3709, 1.4760, 28.0000, 7.9874, 2.9072, 28.0000, 7.3612, 4.2500, 28.0000,
    6.5114, 5.4637, 28.0000, 5.4637, 6.5114, 28.0000, 4.2500, 7.3612, 28.0000, 2.9072, 7.9874,
    28.0000, 1.4760, 8.3709, 28.0000, 0.0000, 8.5000, 28.0000, -1.4760, 8.3709, 28.0000, -2.9072,
    7.9874, 28.0000, -4.2500, 7.3612, 28.0000, -5.4637, 6.5114, 28.0000, -6.5114, 5.4637, 28.0000,
    -7.3612, 4.2500, 28.0000, -7.9874, 2.9072, 28.0000, -8.3709, 1.4760, 28.0000, -8.5000, 0.0000,
    28.0000, -8.3709, -1.4760, 28.0000, -7.9874, -2.9072, 28.0000, -7.3612, -4.2500, 28.0000,
    -6.5114, -5.4637, 28.0000, -5.4637, -6.5114, 28.0000, -4.2500, -7.3612, 28.0000, -2.9072,
    -7.9874, 28.0000, -1.4760, -8.3709, 28.0000, -0.0000, -8.5000, 28.0000, 1.4760, -8.3709,
    28.0000, 2.9072, -7.9874, 28.0000, 4.2500, -7.3612, 28.0000, 5.4637, -6.5114, 28.0000, 6.5114,
    -5.4637, 28.0000, 7.3612, -4.2500, 28.0000, 7.9874, -2.9072, 28.0000, 8.3709, -1.4760,
    28.0000, 5.0000, 0.0000, 29.5000, 4.9240, 0.8682, 29.5000, 4.6985, 1.7101, 29.5000, 4.3301,
    2.5000, 29.5000, 3.8302, 3.2139, 29.5000, 3.2139, 3.8302, 29.5000, 2.5000, 4.3301, 29.5000,
    1.7101, 4.6985, 29.5000, 0.8682, 4.9240, 29.5000, 0.0000, 5.0000, 29.5000, -0.8682, 4.9240,
    29.5000, -1.7101, 4.6985, 29.5000, -2.5000, 4.3301, 29.5000, -3.2139, 3.8302, 29.5000,
    -3.8302, 3.2139, 29.5000, -4.3301, 2.5000, 29.5000, -4.6985, 1.7101, 29.5000, -4.9240, 0.8682,
    29.5000, -5.0000, 0.0000, 29.5000, -4.9240, -0.8682, 29.5000, -4.6985, -1.7101, 29.5000,
    -4.3301, -2.5000, 29.5000, -3.8302, -3.2139, 29.5000, -3.2139, -3.8302, 29.5000, -2.5000,
    -4.3301, 29.5000, -1.7101, -4.6985, 29.5000, -0.8682, -4.9240, 29.5000, -0.0000, -5.0000,
    29.5000, 0.8682, -4.9240, 29.5000, 1.7101, -4.6985, 29.5000, 2.5000, -4.3301, 29.5000, 3.2139,
    -3.8302, 29.5000, 3.8302, -3.2139, 29.5000, 4.3301, -2.5000, 29.5000, 4.6985, -1.7101,
    29.5000, 4.9240, -0.8682, 29.5000, 3.0000, 0.0000, 30.5000, 2.9544, 0.5209, 30.5000, 2.8191,
    1.0261, 30.5000, 2.5981, 1.5000, 30.5000, 2.2981, 1.9284, 30.5000, 1.9284, 2.2981, 30.5000,
    1.5000, 2.5981, 30.5000, 1.0261, 2.8191, 30.5000, 0.5209, 2.9544, 30.5000, 0.0000, 3.0000,
    30.5000, -0.5209, 2.9544, 30.5000, -1.0261, 2.8191, 30.5000, -1.5000, 2.5981, 30.5000,
    -1.9284, 2.2981, 30.5000, -2.2981, 1.9284, 30.5000, -2.5981, 1.5000, 30.5000, -2.8191, 1.0261,
    30.5000, -2.9544, 0.5209, 30.5000, -3.0000, 0.0000, 30.5000, -2.9544, -0.5209, 30.5000,
    -2.8191, -1.0261, 30.5000, -2.5981, -1.5000, 30.5000, -2.2981, -1.9284, 30.5000, -1.9284,
    -2.2981, 30.5000, -1.5000, -2.5981, 30.5000, -1.0261, -2.8191, 30.5000, -0.5209, -2.9544,
    30.5000, -0.0000, -3.0000, 30.5000, 0.5209, -2.9544, 30.5000, 1.0261, -2.8191, 30.5000,
    1.5000, -2.5981, 30.5000, 1.9284, -2.2981, 30.5000, 2.2981, -1.9284, 30.5000, 2.5981, -1.5000,
    30.5000, 2.8191, -1.0261, 30.5000, 2.9544, -0.5209, 30.5000, 3.5000, 0.0000, 32.0000, 3.4468,
    0.6078, 32.0000, 3.2889, 1.1971, 32.0000, 3.0311, 1.7500, 32.0000, 2.6812, 2.2498, 32.0000,
    2.2498, 2.6812, 32.0000, 1.7500, 3.0311, 32.0000, 1.1971, 3.2889, 32.0000, 0.6078, 3.4468,
    32.0000, 0.0000, 3.5000, 32.0000, -0.6078, 3.4468, 32.0000, -1.1971, 3.2889, 32.0000, -1.7500,
    3.0311, 32.0000, -2.2498, 2.6812, 32.0000, -2.6812, 2.2498, 32.0000, -3.0311, 1.7500, 32.0000,
    -3.2889, 1.1971, 32.0000, -3.4468, 0.6078, 32.0000, -3.5000, 0.0000, 32.0000, -3.4468,
    -0.6078, 32.0000, -3.2889, -1.1971, 32.0000, -3.0311, -1.7500, 32.0000, -2.6812, -2.2498,
    32.0000, -2.2498, -2.6812, 32.0000, -1.7500, -3.0311, 32.0000, -1.1971, -3.2889, 32.0000,
    -0.6078, -3.4468, 32.0000, -0.0000, -3.5000, 32.0000, 0.6078, -3.4468, 32.0000, 1.1971,
    -3.2889, 32.0000, 1.7500, -3.0311, 32.0000, 2.2498, -2.6812, 32.0000, 2.6812, -2.2498,
    32.0000, 3.0311, -1.7500, 32.0000, 3.2889, -1.1971, 32.0000, 3.4468, -0.6078, 32.0000, 2.8000,
    0.0000, 33.5000, 2.7575, 0.4862, 33.5000, 2.6311, 0.9577, 33.5000, 2.4249, 1.4000, 33.5000,
    2.1449, 1.7998, 33.5000, 1.7998, 2.1449, 33.5000, 1.4000, 2.4249, 33.5000, 0.9577, 2.6311,
    33.5000, 0.4862, 2.7575, 33.5000, 0.0000, 2.8000, 33.5000, -0.4862, 2.7575, 33.5000, -0.9577,
    2.6311, 33.5000, -1.4000, 2.4249, 33.5000, -1.7998, 2.1449, 33.5000, -2.1449, 1.7998, 33.5000,
    -2.4249, 1.4000, 33.5000, -2.6311, 0.9577, 33.5000, -2.7575, 0.4862, 33.5000, -2.8000, 0.0000,
    33.5000, -2.7575, -0.4862, 33.5000, -2.6311, -0.9577, 33.5000, -2.4249, -1.4000, 33.5000,
    -2.1449, -1.7998, 33.5000, -1.7998, -2.1449, 33.5000, -1.4000, -2.4249, 33.5000, -0.9577,
    -2.6311, 33.5000, -0.4862, -2.7575, 33.5000, -0.0000, -2.8000, 33.5000, 0.4862, -2.7575,
    33.5000, 0.9577, -2.6311, 33.5000, 1.4000, -2.4249, 33.5000, 1.7998, -2.1449, 33.5000, 2.1449,
    -1.7998, 33.5000, 2.4249, -1.4000, 33.5000, 2.6311, -0.9577, 33.5000, 2.7575, -0.4862,
    33.5000, 1.5000, 0.0000, 34.5000, 1.4772, 0.2605, 34.5000, 1.4095, 0.5130, 34.5000, 1.2990,
    0.7500, 34.5000, 1.1491, 0.9642, 34.5000, 0.9642, 1.1491, 34.5000, 0.7500, 1.2990, 34.5000,
    0.5130, 1.4095, 34.5000, 0.2605, 1.4772, 34.5000, 0.0000, 1.5000, 34.5000, -0.2605, 1.4772,
    34.5000, -0.5130, 1.4095, 34.5000, -0.7500, 1.2990, 34.5000, -0.9642, 1.1491, 34.5000,
    -1.1491, 0.9642, 34.5000, -1.2990, 0.7500, 34.5000, -1.4095, 0.5130, 34.5000, -1.4772, 0.2605,
    34.5000, -1.5000, 0.0000, 34.5000, -1.4772, -0.2605, 34.5000, -1.4095, -0.5130, 34.5000,
    -1.2990, -0.7500, 34.5000, -1.1491, -0.9642, 34.5000, -0.9642, -1.1491, 34.5000, -0.7500,
    -1.2990, 34.5000, -0.5130, -1.4095, 34.5000, -0.2605, -1.4772, 34.5000, -0.0000, -1.5000,
    34.5000, 0.2605, -1.4772, 34.5000, 0.5130, -1.4095, 34.5000, 0.7500, -1.2990, 34.5000, 0.9642,
    -1.1491, 34.5000, 1.1491, -0.9642, 34.5000, 1.2990, -0.7500, 34.5000, 1.4095, -0.5130,
    34.5000, 1.4772, -0.2605, 34.5000, 0.0000, 0.0000, 35.0000, 0.0000, 0.0000, 35.0000, 0.0000,
    0.0000, 35.0000, 0.0000, 0.0000, 35.0000, 0.0000, 0.0000, 35.0000, 0.0000, 0.0000, 35.0000,
    0.0000, 0.0000, 35.0000, 0.0000, 0.0000, 35.0000, 0.0000, 0.0000, 35.0000, 0.0000, 0.0000,
    35.0000, -0.0000, 0.0000, 35.0000, -0.0000, 0.0000, 35.0000, -0.0000, 0.0000, 35.0000,
    -0.0000, 0.0000, 35.0000, -0.0000, 0.0000, 35.0000, -0.0000, 0.0000, 35.0000, -0.0000, 0.0000,
    35.0000, -0.0000, 0.0000, 35.0000, -0.0000, 0.0000, 35.0000, -0.0000, -0.0000, 35.0000,
    -0.0000, -0.0000, 35.0000, -0.0000, -0.0000, 35.0000, -0.0000, -0.0000, 35.0000, -0.0000,
    -0.0000, 35.0000, -0.0000, -0.0000, 35.0000, -0.0000, -0.0000, 35.0000, -0.0000, -0.0000,
    35.0000, -0.0000, -0.0000, 35.0000, 0.0000, -0.0000, 35.0000, 0.0000, -0.0000, 35.0000,
    0.0000, -0.0000, 35.0000, 0.0000, -0.0000, 35.0000, 0.0000, -0.0000, 35.0000, 0.0000, -0.0000,
    35.0000, 0.0000, -0.0000, 35.0000, 0.0000, -0.0000, 35.0000, -27.6563, 0.0000, 23.2635,
    -27.4716, 0.9000, 23.1085, -26.9669, 1.5588, 22.6850, -26.2774, 1.8000, 22.1065, -25.5880,
    1.5588, 21.5280, -25.0833, 0.9000, 21.1045, -24.8985, 0.0000, 20.9495, -25.0833, -0.9000,
    21.1045, -25.5880, -1.5588, 21.5280, -26.2774, -1.8000, 22.1065, -26.9669, -1.5588, 22.6850,
    -27.4716, -0.9000, 23.1085, -26.2074, 0.0000, 24.7031, -26.0536, 0.9000, 24.5173, -25.6334,
    1.5588, 24.0099, -25.0593, 1.8000, 23.3167, -24.4853, 1.5588, 22.6236, -24.0650, 0.9000,
    22.1161, -23.9112, 0.0000, 21.9304, -24.0650, -0.9000, 22.1161, -24.4853, -1.5588, 22.6236,
    -25.0593, -1.8000, 23.3167, -25.6334, -1.5588, 24.0099, -26.0536, -0.9000, 24.5173, -24.5230,
    0.0000, 25.8583, -24.4051, 0.9000, 25.6479, -24.0831, 1.5588, 25.0731, -23.6432, 1.8000,
    24.2880, -23.2034, 1.5588, 23.5028, -22.8813, 0.9000, 22.9280, -22.7635, 0.0000, 22.7176,
    -22.8813, -0.9000, 22.9280, -23.2034, -1.5588, 23.5028, -23.6432, -1.8000, 24.2880, -24.0831,
    -1.5588, 25.0731, -24.4051, -0.9000, 25.6479, -22.6582, 0.0000, 26.6915, -22.5801, 0.9000,
    26.4633, -22.3668, 1.5588, 25.8399, -22.0755, 1.8000, 24.9884, -21.7841, 1.5588, 24.1369,
    -21.5708, 0.9000, 23.5135, -21.4928, 0.0000, 23.2853, -21.5708, -0.9000, 23.5135, -21.7841,
    -1.5588, 24.1369, -22.0755, -1.8000, 24.9884, -22.3668, -1.5588, 25.8399, -22.5801, -0.9000,
    26.4633, -20.6739, 0.0000, 27.1753, -20.6381, 0.9000, 26.9368, -20.5405, 1.5588, 26.2853,
    -20.4072, 1.8000, 25.3952, -20.2739, 1.5588, 24.5051, -20.1763, 0.9000, 23.8535, -20.1406,
    0.0000, 23.6151, -20.1763, -0.9000, 23.8535, -20.2739, -1.5588, 24.5051, -20.4072, -1.8000,
    25.3952, -20.5405, -1.5588, 26.2853, -20.6381, -0.9000, 26.9368, -18.6348, 0.0000, 27.2941,
    -18.6426, 0.9000, 27.0531, -18.6639, 1.5588, 26.3946, -18.6930, 1.8000, 25.4950, -18.7221,
    1.5588, 24.5955, -18.7434, 0.9000, 23.9370, -18.7512, 0.0000, 23.6960, -18.7434, -0.9000,
    23.9370, -18.7221, -1.5588, 24.5955, -18.6930, -1.8000, 25.4950, -18.6639, -1.5588, 26.3946,
    -18.6426, -0.9000, 27.0531, -16.6077, 0.0000, 27.0439, -16.6588, 0.9000, 26.8082, -16.7983,
    1.5588, 26.1643, -16.9888, 1.8000, 25.2847, -17.1793, 1.5588, 24.4051, -17.3188, 0.9000,
    23.7612, -17.3699, 0.0000, 23.5255, -17.3188, -0.9000, 23.7612, -17.1793, -1.5588, 24.4051,
    -16.9888, -1.8000, 25.2847, -16.7983, -1.5588, 26.1643, -16.6588, -0.9000, 26.8082, -14.6588,
    0.0000, 26.4328, -14.7515, 0.9000, 26.2102, -15.0046, 1.5588, 25.6019, -15.3503, 1.8000,
    24.7710, -15.6961, 1.5588, 23.9400, -15.9492, 0.9000, 23.3317, -16.0418, 0.0000, 23.1091,
    -15.9492, -0.9000, 23.3317, -15.6961, -1.5588, 23.9400, -15.3503, -1.8000, 24.7710, -15.0046,
    -1.5588, 25.6019, -14.7515, -0.9000, 26.2102, -12.8517, 0.0000, 25.4810, -12.9829, 0.9000,
    25.2786, -13.3414, 1.5588, 24.7258, -13.8311, 1.8000, 23.9707, -14.3208, 1.5588, 23.2156,
    -14.6792, 0.9000, 22.6628, -14.8105, 0.0000, 22.4605, -14.6792, -0.9000, 22.6628, -14.3208,
    -1.5588, 23.2156, -13.8311, -1.8000, 23.9707, -13.3414, -1.5588, 24.7258, -12.9829, -0.9000,
    25.2786, -11.2455, 0.0000, 24.2193, -11.4110, 0.9000, 24.0439, -11.8631, 1.5588, 23.5647,
    -12.4807, 1.8000, 22.9100, -13.0983, 1.5588, 22.2554, -13.5504, 0.9000, 21.7762, -13.7159,
    0.0000, 21.6008, -13.5504, -0.9000, 21.7762, -13.0983, -1.5588, 22.2554, -12.4807, -1.8000,
    22.9100, -11.8631, -1.5588, 23.5647, -11.4110, -0.9000, 24.0439, -9.8926, 0.0000, 22.6892,
    -10.0869, 0.9000, 22.5464, -10.6179, 1.5588, 22.1564, -11.3433, 1.8000, 21.6236, -12.0687,
    1.5588, 21.0909, -12.5997, 0.9000, 20.7009, -12.7941, 0.0000, 20.5581, -12.5997, -0.9000,
    20.7009, -12.0687, -1.5588, 21.0909, -11.3433, -1.8000, 21.6236, -10.6179, -1.5588, 22.1564,
    -10.0869, -0.9000, 22.5464, -8.8372, 0.0000, 20.9405, -9.0541, 0.9000, 20.8350, -9.6467,
    1.5588, 20.5470, -10.4561, 1.8000, 20.1535, -11.2655, 1.5588, 19.7600, -11.8580, 0.9000,
    19.4719, -12.0749, 0.0000, 19.3665, -11.8580, -0.9000, 19.4719, -11.2655, -1.5588, 19.7600,
    -10.4561, -1.8000, 20.1535, -9.6467, -1.5588, 20.5470, -9.0541, -0.9000, 20.8350, -8.1139,
    0.0000, 19.0304, -8.3462, 0.9000, 18.9657, -8.9809, 1.5588, 18.7890, -9.8480, 1.8000, 18.5476,
    -10.7150, 1.5588, 18.3063, -11.3497, 0.9000, 18.1296, -11.5820, 0.0000, 18.0649, -11.3497,
    -0.9000, 18.1296, -10.7150, -1.5588, 18.3063, -9.8480, -1.8000, 18.5476, -8.9809, -1.5588,
    18.7890, -8.3462, -0.9000, 18.9657, -7.7462, 0.0000, 17.0212, -7.9864, 0.9000, 16.9994,
    -8.6426, 1.5588, 16.9399, -9.5389, 1.8000, 16.8586, -10.4352, 1.5588, 16.7772, -11.0913,
    0.9000, 16.7177, -11.3315, 0.0000, 16.6959, -11.0913, -0.9000, 16.7177, -10.4352, -1.5588,
    16.7772, -9.5389, -1.8000, 16.8586, -8.6426, -1.5588, 16.9399, -7.9864, -0.9000, 16.9994,
    -7.7462, 0.0000, 14.9788, -7.9864, 0.9000, 15.0006, -8.6426, 1.5588, 15.0601, -9.5389, 1.8000,
    15.1414, -10.4352, 1.5588, 15.2228, -11.0913, 0.9000, 15.2823, -11.3315, 0.0000, 15.3041,
    -11.0913, -0.9000, 15.2823, -10.4352, -1.5588, 15.2228, -9.5389, -1.8000, 15.1414, -8.6426,
    -1.5588, 15.0601, -7.9864, -0.9000, 15.0006, -8.1139, 0.0000, 12.9696, -8.3462, 0.9000,
    13.0343, -8.9809, 1.5588, 13.2110, -9.8480, 1.8000, 13.4524, -10.7150, 1.5588, 13.6937,
    -11.3497, 0.9000, 13.8704, -11.5820, 0.0000, 13.9351, -11.3497, -0.9000, 13.8704, -10.7150,
    -1.5588, 13.6937, -9.8480, -1.8000, 13.4524, -8.9809, -1.5588, 13.2110, -8.3462, -0.9000,
    13.0343, -8.8372, 0.0000, 11.0595, -9.0541, 0.9000, 11.1650, -9.6467, 1.5588, 11.4530,
    -10.4561, 1.8000, 11.8465, -11.2655, 1.5588, 12.2400, -11.8580, 0.9000, 12.5281, -12.0749,
    0.0000, 12.6335, -11.8580, -0.9000, 12.5281, -11.2655, -1.5588, 12.2400, -10.4561, -1.8000,
    11.8465, -9.6467, -1.5588, 11.4530, -9.0541, -0.9000, 11.1650, -9.8926, 0.0000, 9.3108,
    -10.0869, 0.9000, 9.4536, -10.6179, 1.5588, 9.8436, -11.3433, 1.8000, 10.3764, -12.0687,
    1.5588, 10.9091, -12.5997, 0.9000, 11.2991, -12.7941, 0.0000, 11.4419, -12.5997, -0.9000,
    11.2991, -12.0687, -1.5588, 10.9091, -11.3433, -1.8000, 10.3764, -10.6179, -1.5588, 9.8436,
    -10.0869, -0.9000, 9.4536, -11.2455, 0.0000, 7.7807, -11.4110, 0.9000, 7.9561, -11.8631,
    1.5588, 8.4353, -12.4807, 1.8000, 9.0900, -13.0983, 1.5588, 9.7446, -13.5504, 0.9000, 10.2238,
    -13.7159, 0.0000, 10.3992, -13.5504, -0.9000, 10.2238, -13.0983, -1.5588, 9.7446, -12.4807,
    -1.8000, 9.0900, -11.8631, -1.5588, 8.4353, -11.4110, -0.9000, 7.9561, -12.8517, 0.0000,
    6.5190, -12.9829, 0.9000, 6.7214, -13.3414, 1.5588, 7.2742, -13.8311, 1.8000, 8.0293,
    -14.3208, 1.5588, 8.7844, -14.6792, 0.9000, 9.3372, -14.8105, 0.0000, 9.5395, -14.6792,
    -0.9000, 9.3372, -14.3208, -1.5588, 8.7844, -13.8311, -1.8000, 8.0293, -13.3414, -1.5588,
    7.2742, -12.9829, -0.9000, 6.7214, -14.6588, 0.0000, 5.5672, -14.7515, 0.9000, 5.7898,
    -15.0046, 1.5588, 6.3981, -15.3503, 1.8000, 7.2290, -15.6961, 1.5588, 8.0600, -15.9492,
    0.9000, 8.6683, -16.0418, 0.0000, 8.8909, -15.9492, -0.9000, 8.6683, -15.6961, -1.5588,
    8.0600, -15.3503, -1.8000, 7.2290, -15.0046, -1.5588, 6.3981, -14.7515, -0.9000, 5.7898,
    -16.6077, 0.0000, 4.9561, -16.6588, 0.9000, 5.1918, -16.7983, 1.5588, 5.8357, -16.9888,
    1.8000, 6.7153, -17.1793, 1.5588, 7.5949, -17.3188, 0.9000, 8.2388, -17.3699, 0.0000, 8.4745,
    -17.3188, -0.9000, 8.2388, -17.1793, -1.5588, 7.5949, -16.9888, -1.8000, 6.7153, -16.7983,
    -1.5588, 5.8357, -16.6588, -0.9000, 5.1918, -18.6348, 0.0000, 4.7059, -18.6426, 0.9000,
    4.9469, -18.6639, 1.5588, 5.6054, -18.6930, 1.8000, 6.5050, -18.7221, 1.5588, 7.4045,
    -18.7434, 0.9000, 8.0630, -18.7512, 0.0000, 8.3040, -18.7434, -0.9000, 8.0630, -18.7221,
    -1.5588, 7.4045, -18.6930, -1.8000, 6.5050, -18.6639, -1.5588, 5.6054, -18.6426, -0.9000,
    4.9469, -20.6739, 0.0000, 4.8247, -20.6381, 0.9000, 5.0632, -20.5405, 1.5588, 5.7147,
    -20.4072, 1.8000, 6.6048, -20.2739, 1.5588, 7.4949, -20.1763, 0.9000, 8.1465, -20.1406,
    0.0000, 8.3849, -20.1763, -0.9000, 8.1465, -20.2739, -1.5588, 7.4949, -20.4072, -1.8000,
    6.6048, -20.5405, -1.5588, 5.7147, -20.6381, -0.9000, 5.0632, -22.6582, 0.0000, 5.3085,
    -22.5801, 0.9000, 5.5367, -22.3668, 1.5588, 6.1601, -22.0755, 1.8000, 7.0116, -21.7841,
    1.5588, 7.8631, -21.5708, 0.9000, 8.4865, -21.4928, 0.0000, 8.7147, -21.5708, -0.9000, 8.4865,
    -21.7841, -1.5588, 7.8631, -22.0755, -1.8000, 7.0116, -22.3668, -1.5588, 6.1601, -22.5801,
    -0.9000, 5.5367, -24.5230, 0.0000, 6.1417, -24.4051, 0.9000, 6.3521, -24.0831, 1.5588, 6.9269,
    -23.6432, 1.8000, 7.7120, -23.2034, 1.5588, 8.4972, -22.8813, 0.9000, 9.0720, -22.7635,
    0.0000, 9.2824, -22.8813, -0.9000, 9.0720, -23.2034, -1.5588, 8.4972, -23.6432, -1.8000,
    7.7120, -24.0831, -1.5588, 6.9269, -24.4051, -0.9000, 6.3521, -26.2074, 0.0000, 7.2969,
    -26.0536, 0.9000, 7.4827, -25.6334, 1.5588, 7.9901, -25.0593, 1.8000, 8.6833, -24.4853,
    1.5588, 9.3764, -24.0650, 0.9000, 9.8839, -23.9112, 0.0000, 10.0696, -24.0650, -0.9000,
    9.8839, -24.4853, -1.5588, 9.3764, -25.0593, -1.8000, 8.6833, -25.6334, -1.5588, 7.9901,
    -26.0536, -0.9000, 7.4827, -27.6563, 0.0000, 8.7365, -27.4716, 0.9000, 8.8915, -26.9669,
    1.5588, 9.3150, -26.2774, 1.8000, 9.8935, -25.5880, 1.5588, 10.4720, -25.0833, 0.9000,
    10.8955, -24.8985, 0.0000, 11.0505, -25.0833, -0.9000, 10.8955, -25.5880, -1.5588, 10.4720,
    -26.2774, -1.8000, 9.8935, -26.9669, -1.5588, 9.3150, -27.4716, -0.9000, 8.8915, 14.6551,
    0.0000, 10.1774, 14.9692, 1.6000, 9.8857, 15.8275, 2.7713, 9.0887, 17.0000, 3.2000, 8.0000,
    18.1725, 2.7713, 6.9113, 19.0308, 1.6000, 6.1143, 19.3449, 0.0000, 5.8226, 19.0308, -1.6000,
    6.1143, 18.1725, -2.7713, 6.9113, 17.0000, -3.2000, 8.0000, 15.8275, -2.7713, 9.0887, 14.9692,
    -1.6000, 9.8857, 16.2216, 0.0000, 11.6196, 16.5194, 1.5167, 11.3431, 17.3330, 2.6269, 10.5876,
    18.4444, 3.0333, 9.5556, 19.5558, 2.6269, 8.5235, 20.3695, 1.5167, 7.7680, 20.6673, 0.0000,
    7.4915, 20.3695, -1.5167, 7.7680, 19.5558, -2.6269, 8.5235, 18.4444, -3.0333, 9.5556, 17.3330,
    -2.6269, 10.5876, 16.5194, -1.5167, 11.3431, 17.7882, 0.0000, 13.0617, 18.0697, 1.4333,
    12.8004, 18.8386, 2.4826, 12.0864, 19.8889, 2.8667, 11.1111, 20.9392, 2.4826, 10.1358,
    21.7081, 1.4333, 9.4218, 21.9896, 0.0000, 9.1605, 21.7081, -1.4333, 9.4218, 20.9392, -2.4826,
    10.1358, 19.8889, -2.8667, 11.1111, 18.8386, -2.4826, 12.0864, 18.0697, -1.4333, 12.8004,
    19.3548, 0.0000, 14.5039, 19.6199, 1.3500, 14.2577, 20.3441, 2.3383, 13.5853, 21.3333, 2.7000,
    12.6667, 22.3226, 2.3383, 11.7481, 23.0468, 1.3500, 11.0756, 23.3119, 0.0000, 10.8294,
    23.0468, -1.3500, 11.0756, 22.3226, -2.3383, 11.7481, 21.3333, -2.7000, 12.6667, 20.3441,
    -2.3383, 13.5853, 19.6199, -1.3500, 14.2577, 20.9214, 0.0000, 15.9460, 21.1701, 1.2667,
    15.7151, 21.8496, 2.1939, 15.0841, 22.7778, 2.5333, 14.2222, 23.7060, 2.1939, 13.3603,
    24.3855, 1.2667, 12.7294, 24.6342, 0.0000, 12.4984, 24.3855, -1.2667, 12.7294, 23.7060,
    -2.1939, 13.3603, 22.7778, -2.5333, 14.2222, 21.8496, -2.1939, 15.0841, 21.1701, -1.2667,
    15.7151, 22.4879, 0.0000, 17.3882, 22.7203, 1.1833, 17.1724, 23.3551, 2.0496, 16.5830,
    24.2222, 2.3667, 15.7778, 25.0894, 2.0496, 14.9726, 25.7242, 1.1833, 14.3831, 25.9565, 0.0000,
    14.1674, 25.7242, -1.1833, 14.3831, 25.0894, -2.0496, 14.9726, 24.2222, -2.3667, 15.7778,
    23.3551, -2.0496, 16.5830, 22.7203, -1.1833, 17.1724, 24.0545, 0.0000, 18.8303, 24.2705,
    1.1000, 18.6298, 24.8606, 1.9053, 18.0818, 25.6667, 2.2000, 17.3333, 26.4727, 1.9053, 16.5848,
    27.0628, 1.1000, 16.0369, 27.2788, 0.0000, 15.8363, 27.0628, -1.1000, 16.0369, 26.4727,
    -1.9053, 16.5848, 25.6667, -2.2000, 17.3333, 24.8606, -1.9053, 18.0818, 24.2705, -1.1000,
    18.6298, 25.6211, 0.0000, 20.2725, 25.8207, 1.0167, 20.0871, 26.3661, 1.7609, 19.5807,
    27.1111, 2.0333, 18.8889, 27.8561, 1.7609, 18.1971, 28.4015, 1.0167, 17.6907, 28.6011, 0.0000,
    17.5053, 28.4015, -1.0167, 17.6907, 27.8561, -1.7609, 18.1971, 27.1111, -2.0333, 18.8889,
    26.3661, -1.7609, 19.5807, 25.8207, -1.0167, 20.0871, 27.1877, 0.0000, 21.7146, 27.3709,
    0.9333, 21.5444, 27.8716, 1.6166, 21.0795, 28.5556, 1.8667, 20.4444, 29.2395, 1.6166, 19.8094,
    29.7402, 0.9333, 19.3444, 29.9234, 0.0000, 19.1743, 29.7402, -0.9333, 19.3444, 29.2395,
    -1.6166, 19.8094, 28.5556, -1.8667, 20.4444, 27.8716, -1.6166, 21.0795, 27.3709, -0.9333,
    21.5444, 28.7543, 0.0000, 23.1568, 28.9211, 0.8500, 23.0018, 29.3771, 1.4722, 22.5784,
    30.0000, 1.7000, 22.0000, 30.6229, 1.4722, 21.4216, 31.0789, 0.8500, 20.9982, 31.2457, 0.0000,
    20.8432, 31.0789, -0.8500, 20.9982, 30.6229, -1.4722, 21.4216, 30.0000, -1.7000, 22.0000,
    29.3771, -1.4722, 22.5784, 28.9211, -0.8500, 23.0018,
];

pub static TEAPOT_NORMALS: [f32; 3528] = [
    0.0000, 0.0000, -1.0000, 0.0000, 0.0000, -1.0000, 0.0000, 0.0000, -1.0000, 0.0000, 0.0000,
    -1.0000, 0.0000, 0.0000, -1.0000, 0.0000, 0.0000, -1.0000, 0.0000, 0.0000, -1.0000, 0.0000,
    0.0000, -1.0000, 0.0000, 0.0000, -1.0000, 0.0000, 0.0000, -1.0000, -0.0000, 0.0000, -1.0000,
    -0.0000, 0.0000, -1.0000, -0.0000, 0.0000, -1.0000, -0.0000, 0.0000, -1.0000, -0.0000, 0.0000,
    -1.0000, -0.0000, 0.0000, -1.0000, -0.0000, 0.0000, -1.0000, -0.0000, 0.0000, -1.0000,
    -0.0000, 0.0000, -1.0000, -0.0000, -0.0000, -1.0000, -0.0000, -0.0000, -1.0000, -0.0000,
    -0.0000, -1.0000, -0.0000, -0.0000, -1.0000, -0.0000, -0.0000, -1.0000, -0.0000, -0.0000,
    -1.0000, -0.0000, -0.0000, -1.0000, -0.0000, -0.0000, -1.0000, -0.0000, -0.0000, -1.0000,
    0.0000, -0.0000, -1.0000, 0.0000, -0.0000, -1.0000, 0.0000, -0.0000, -1.0000, 0.0000, -0.0000,
    -1.0000, 0.0000, -0.0000, -1.0000, 0.0000, -0.0000, -1.0000, 0.0000, -0.0000, -1.0000, 0.0000,
    -0.0000, -1.0000, 0.0357, 0.0000, -0.9994, 0.0351, 0.0062, -0.9994, 0.0335, 0.0122, -0.9994,
    0.0309, 0.0178, -0.9994, 0.0273, 0.0229, -0.9994, 0.0229, 0.0273, -0.9994, 0.0178, 0.0309,
    -0.9994, 0.0122, 0.0335, -0.9994, 0.0062, 0.0351, -0.9994, 0.0000, 0.0357, -0.9994, -0.0062,
    0.0351, -0.9994, -0.0122, 0.0335, -0.9994, -0.0178, 0.0309, -0.9994, -0.0229, 0.0273, -0.9994,
    -0.0273, 0.0229, -0.9994, -0.0309, 0.0178, -0.9994, -0.0335, 0.0122, -0.9994, -0.0351, 0.0062,
    -0.9994, -0.0357, 0.0000, -0.9994, -0.0351, -0.0062, -0.9994, -0.0335, -0.0122, -0.9994,
    -0.0309, -0.0178, -0.9994, -0.0273, -0.0229, -0.9994, -0.0229, -0.0273, -0.9994, -0.0178,
    -0.0309, -0.9994, -0.0122, -0.0335, -0.9994, -0.0062, -0.0351, -0.9994, -0.0000, -0.0357,
    -0.9994, 0.0062, -0.0351, -0.9994, 0.0122, -0.0335, -0.9994, 0.0178, -0.0309, -0.9994, 0.0229,
    -0.0273, -0.9994, 0.0273, -0.0229, -0.9994, 0.0309, -0.0178, -0.9994, 0.0335, -0.0122,
    -0.9994, 0.0351, -0.0062, -0.9994, 0.2169, 0.0000, -0.9762, 0.2136, 0.0377, -0.9762, 0.2038,
    0.0742, -0.9762, 0.1879, 0.1085, -0.9762, 0.1662, 0.1394, -0.9762, 0.1394, 0.1662, -0.9762,
    0.1085, 0.1879, -0.9762, 0.0742, 0.2038, -0.9762, 0.0377, 0.2136, -0.9762, 0.0000, 0.2169,
    -0.9762, -0.0377, 0.2136, -0.9762, -0.0742, 0.2038, -0.9762, -0.1085, 0.1879, -0.9762,
    -0.1394, 0.1662, -0.9762, -0.1662, 0.1394, -0.9762, -0.1879, 0.1085, -0.9762, -0.2038, 0.0742,
    -0.9762, -0.2136, 0.0377, -0.9762, -0.2169, 0.0000, -0.9762, -0.2136, -0.0377, -0.9762,
    -0.2038, -0.0742, -0.9762, -0.1879, -0.1085, -0.9762, -0.1662, -0.1394, -0.9762, -0.1394,
    -0.1662, -0.9762, -0.1085, -0.1879, -0.9762, -0.0742, -0.2038, -0.9762, -0.0377, -0.2136,
    -0.9762, -0.0000, -0.2169, -0.9762, 0.0377, -0.2136, -0.9762, 0.0742, -0.2038, -0.9762,
    0.1085, -0.1879, -0.9762, 0.1394, -0.1662, -0.9762, 0.1662, -0.1394, -0.9762, 0.1879, -0.1085,
    -0.9762, 0.2038, -0.0742, -0.9762, 0.2136, -0.0377, -0.9762, 0.6690, 0.0000, -0.7433, 0.6588,
    0.1162, -0.7433, 0.6286, 0.2288, -0.7433, 0.5793, 0.3345, -0.7433, 0.5125, 0.4300, -0.7433,
    0.4300, 0.5125, -0.7433, 0.3345, 0.5793, -0.7433, 0.2288, 0.6286, -0.7433, 0.1162, 0.6588,
    -0.7433, 0.0000, 0.6690, -0.7433, -0.1162, 0.6588, -0.7433, -0.2288, 0.6286, -0.7433, -0.3345,
    0.5793, -0.7433, -0.4300, 0.5125, -0.7433, -0.5125, 0.4300, -0.7433, -0.5793, 0.3345, -0.7433,
    -0.6286, 0.2288, -0.7433, -0.6588, 0.1162, -0.7433, -0.6690, 0.0000, -0.7433, -0.6588,
    -0.1162, -0.7433, -0.6286, -0.2288, -0.7433, -0.5793, -0.3345, -0.7433, -0.5125, -0.4300,
    -0.7433, -0.4300, -0.5125, -0.7433, -0.3345, -0.5793, -0.7433, -0.2288, -0.6286, -0.7433,
    -0.1162, -0.6588, -0.7433, -0.0000, -0.6690, -0.7433, 0.1162, -0.6588, -0.7433, 0.2288,
    -0.6286, -0.7433, 0.3345, -0.5793, -0.7433, 0.4300, -0.5125, -0.7433, 0.5125, -0.4300,
    -0.7433, 0.5793, -0.3345, -0.7433, 0.6286, -0.2288, -0.7433, 0.6588, -0.1162, -0.7433, 0.9191,
    0.0000, -0.3939, 0.9052, 0.1596, -0.3939, 0.8637, 0.3144, -0.3939, 0.7960, 0.4596, -0.3939,
    0.7041, 0.5908, -0.3939, 0.5908, 0.7041, -0.3939, 0.4596, 0.7960, -0.3939, 0.3144, 0.8637,
    -0.3939, 0.1596, 0.9052, -0.3939, 0.0000, 0.9191, -0.3939, -0.1596, 0.9052, -0.3939, -0.3144,
    0.8637, -0.3939, -0.4596, 0.7960, -0.3939, -0.5908, 0.7041, -0.3939, -0.7041, 0.5908, -0.3939,
    -0.7960, 0.4596, -0.3939, -0.8637, 0.3144, -0.3939, -0.9052, 0.1596, -0.3939, -0.9191, 0.0000,
    -0.3939, -0.9052, -0.1596, -0.3939, -0.8637, -0.3144, -0.3939, -0.7960, -0.4596, -0.3939,
    -0.7041, -0.5908, -0.3939, -0.5908, -0.7041, -0.3939, -0.4596, -0.7960, -0.3939, -0.3144,
    -0.8637, -0.3939, -0.1596, -0.9052, -0.3939, -0.0000, -0.9191, -0.3939, 0.1596, -0.9052,
    -0.3939, 0.3144, -0.8637, -0.3939, 0.4596, -0.7960, -0.3939, 0.5908, -0.7041, -0.3939, 0.7041,
    -0.5908, -0.3939, 0.7960, -0.4596, -0.3939, 0.8637, -0.3144, -0.3939, 0.9052, -0.1596,
    -0.3939, 0.9923, 0.0000, -0.1240, 0.9772, 0.1723, -0.1240, 0.9324, 0.3394, -0.1240, 0.8593,
    0.4961, -0.1240, 0.7601, 0.6378, -0.1240, 0.6378, 0.7601, -0.1240, 0.4961, 0.8593, -0.1240,
    0.3394, 0.9324, -0.1240, 0.1723, 0.9772, -0.1240, 0.0000, 0.9923, -0.1240, -0.1723, 0.9772,
    -0.1240, -0.3394, 0.9324, -0.1240, -0.4961, 0.8593, -0.1240, -0.6378, 0.7601, -0.1240,
    -0.7601, 0.6378, -0.1240, -0.8593, 0.4961, -0.1240, -0.9324, 0.3394, -0.1240, -0.9772, 0.1723,
    -0.1240, -0.9923, 0.0000, -0.1240, -0.9772, -0.1723, -0.1240, -0.9324, -0.3394, -0.1240,
    -0.8593, -0.4961, -0.1240, -0.7601, -0.6378, -0.1240, -0.6378, -0.7601, -0.1240, -0.4961,
    -0.8593, -0.1240, -0.3394, -0.9324, -0.1240, -0.1723, -0.9772, -0.1240, -0.0000, -0.9923,
    -0.1240, 0.1723, -0.9772, -0.1240, 0.3394, -0.9324, -0.1240, 0.4961, -0.8593, -0.1240, 0.6378,
    -0.7601, -0.1240, 0.7601, -0.6378, -0.1240, 0.8593, -0.4961, -0.1240, 0.9324, -0.3394,
    -0.1240, 0.9772, -0.1723, -0.1240, 0.9829, 0.0000, 0.1843, 0.9679, 0.1707, 0.1843, 0.9236,
    0.3362, 0.1843, 0.8512, 0.4914, 0.1843, 0.7529, 0.6318, 0.1843, 0.6318, 0.7529, 0.1843,
    0.4914, 0.8512, 0.1843, 0.3362, 0.9236, 0.1843, 0.1707, 0.9679, 0.1843, 0.0000, 0.9829,
    0.1843, -0.1707, 0.9679, 0.1843, -0.3362, 0.9236, 0.1843, -0.4914, 0.8512, 0.1843, -0.6318,
    0.7529, 0.1843, -0.7529, 0.6318, 0.1843, -0.8512, 0.4914, 0.1843, -0.9236, 0.3362, 0.1843,
    -0.9679, 0.1707, 0.1843, -0.9829, 0.0000, 0.1843, -0.9679, -0.1707, 0.1843, -0.9236, -0.3362,
    0.1843, -0.8512, -0.4914, 0.1843, -0.7529, -0.6318, 0.1843, -0.6318, -0.7529, 0.1843, -0.4914,
    -0.8512, 0.1843, -0.3362, -0.9236, 0.1843, -0.1707, -0.9679, 0.1843, -0.0000, -0.9829, 0.1843,
    0.1707, -0.9679, 0.1843, 0.3362, -0.9236, 0.1843, 0.4914, -0.8512, 0.1843, 0.6318, -0.7529,
    0.1843, 0.7529, -0.6318, 0.1843, 0.8512, -0.4914, 0.1843, 0.9236, -0.3362, 0.1843, 0.9679,
    -0.1707, 0.1843, 0.8824, 0.0000, 0.4706, 0.8689, 0.1532, 0.4706, 0.8291, 0.3018, 0.4706,
    0.7641, 0.4412, 0.4706, 0.6759, 0.5672, 0.4706, 0.5672, 0.6759, 0.4706, 0.4412, 0.7641,
    0.4706, 0.3018, 0.8291, 0.4706, 0.1532, 0.8689, 0.4706, 0.0000, 0.8824, 0.4706, -0.1532,
    0.8689, 0.4706, -0.3018, 0.8291, 0.4706, -0.4412, 0.7641, 0.4706, -0.5672, 0.6759, 0.4706,
    -0.6759, 0.5672, 0.4706, -0.7641, 0.4412, 0.4706, -0.8291, 0.3018, 0.4706, -0.8689, 0.1532,
    0.4706, -0.8824, 0.0000, 0.4706, -0.8689, -0.1532, 0.4706, -0.8291, -0.3018, 0.4706, -0.7641,
    -0.4412, 0.4706, -0.6759, -0.5672, 0.4706, -0.5672, -0.6759, 0.4706, -0.4412, -0.7641, 0.4706,
    -0.3018, -0.8291, 0.4706, -0.1532, -0.8689, 0.4706, -0.0000, -0.8824, 0.4706, 0.1532, -0.8689,
    0.4706, 0.3018, -0.8291, 0.4706, 0.4412, -0.7641, 0.4706, 0.5672, -0.6759, 0.4706, 0.6759,
    -0.5672, 0.4706, 0.7641, -0.4412, 0.4706, 0.8291, -0.3018, 0.4706, 0.8689, -0.1532, 0.4706,
    0.7682, 0.0000, 0.6402, 0.7566, 0.1334, 0.6402, 0.7219, 0.2627, 0.6402, 0.6653, 0.3841,
    0.6402, 0.5885, 0.4938, 0.6402, 0.4938, 0.5885, 0.6402, 0.3841, 0.6653, 0.6402, 0.2627,
    0.7219, 0.6402, 0.1334, 0.7566, 0.6402, 0.0000, 0.7682, 0.6402, -0.1334, 0.7566, 0.6402,
    -0.2627, 0.7219, 0.6402, -0.3841, 0.6653, 0.6402, -0.4938, 0.5885, 0.6402, -0.5885, 0.4938,
    0.6402, -0.6653, 0.3841, 0.6402, -0.7219, 0.2627, 0.6402, -0.7566, 0.1334, 0.6402, -0.7682,
    0.0000, 0.6402, -0.7566, -0.1334, 0.6402, -0.7219, -0.2627, 0.6402, -0.6653, -0.3841, 0.6402,
    -0.5885, -0.4938, 0.6402, -0.4938, -0.5885, 0.6402, -0.3841, -0.6653, 0.6402, -0.2627,
    -0.7219, 0.6402, -0.1334, -0.7566, 0.6402, -0.0000, -0.7682, 0.6402, 0.1334, -0.7566, 0.6402,
    0.2627, -0.7219, 0.6402, 0.3841, -0.6653, 0.6402, 0.4938, -0.5885, 0.6402, 0.5885, -0.4938,
    0.6402, 0.6653, -0.3841, 0.6402, 0.7219, -0.2627, 0.6402, 0.7566, -0.1334, 0.6402, 0.7593,
    0.0000, 0.6508, 0.7477, 0.1318, 0.6508, 0.7135, 0.2597, 0.6508, 0.6575, 0.3796, 0.6508,
    0.5816, 0.4880, 0.6508, 0.4880, 0.5816, 0.6508, 0.3796, 0.6575, 0.6508, 0.2597, 0.7135,
    0.6508, 0.1318, 0.7477, 0.6508, 0.0000, 0.7593, 0.6508, -0.1318, 0.7477, 0.6508, -0.2597,
    0.7135, 0.6508, -0.3796, 0.6575, 0.6508, -0.4880, 0.5816, 0.6508, -0.5816, 0.4880, 0.6508,
    -0.6575, 0.3796, 0.6508, -0.7135, 0.2597, 0.6508, -0.7477, 0.1318, 0.6508, -0.7593, 0.0000,
    0.6508, -0.7477, -0.1318, 0.6508, -0.7135, -0.2597, 0.6508, -0.6575, -0.3796, 0.6508, -0.5816,
    -0.4880, 0.6508, -0.4880, -0.5816, 0.6508, -0.3796, -0.6575, 0.6508, -0.2597, -0.7135, 0.6508,
    -0.1318, -0.7477, 0.6508, -0.0000, -0.7593, 0.6508, 0.1318, -0.7477, 0.6508, 0.2597, -0.7135,
    0.6508, 0.3796, -0.6575, 0.6508, 0.4880, -0.5816, 0.6508, 0.5816, -0.4880, 0.6508, 0.6575,
    -0.3796, 0.6508, 0.7135, -0.2597, 0.6508, 0.7477, -0.1318, 0.6508, 0.9701, 0.0000, -0.2425,
    0.9554, 0.1685, -0.2425, 0.9116, 0.3318, -0.2425, 0.8402, 0.4851, -0.2425, 0.7432, 0.6236,
    -0.2425, 0.6236, 0.7432, -0.2425, 0.4851, 0.8402, -0.2425, 0.3318, 0.9116, -0.2425, 0.1685,
    0.9554, -0.2425, 0.0000, 0.9701, -0.2425, -0.1685, 0.9554, -0.2425, -0.3318, 0.9116, -0.2425,
    -0.4851, 0.8402, -0.2425, -0.6236, 0.7432, -0.2425, -0.7432, 0.6236, -0.2425, -0.8402, 0.4851,
    -0.2425, -0.9116, 0.3318, -0.2425, -0.9554, 0.1685, -0.2425, -0.9701, 0.0000, -0.2425,
    -0.9554, -0.1685, -0.2425, -0.9116, -0.3318, -0.2425, -0.8402, -0.4851, -0.2425, -0.7432,
    -0.6236, -0.2425, -0.6236, -0.7432, -0.2425, -0.4851, -0.8402, -0.2425, -0.3318, -0.9116,
    -0.2425, -0.1685, -0.9554, -0.2425, -0.0000, -0.9701, -0.2425, 0.1685, -0.9554, -0.2425,
    0.3318, -0.9116, -0.2425, 0.4851, -0.8402, -0.2425, 0.6236, -0.7432, -0.2425, 0.7432, -0.6236,
    -0.2425, 0.8402, -0.4851, -0.2425, 0.9116, -0.3318, -0.2425, 0.9554, -0.1685, -0.2425, 0.8944,
    0.0000, 0.4472, 0.8808, 0.1553, 0.4472, 0.8405, 0.3059, 0.4472, 0.7746, 0.4472, 0.4472,
    0.6852, 0.5749, 0.4472, 0.5749, 0.6852, 0.4472, 0.4472, 0.7746, 0.4472, 0.3059, 0.8405,
    0.4472, 0.1553, 0.8808, 0.4472, 0.0000, 0.8944, 0.4472, -0.1553, 0.8808, 0.4472, -0.3059,
    0.8405, 0.4472, -0.4472, 0.7746, 0.4472, -0.5749, 0.6852, 0.4472, -0.6852, 0.5749, 0.4472,
    -0.7746, 0.4472, 0.4472, -0.8405, 0.3059, 0.4472, -0.8808, 0.1553, 0.4472, -0.8944, 0.0000,
    0.4472, -0.8808, -0.1553, 0.4472, -0.8405, -0.3059, 0.4472, -0.7746, -0.4472, 0.4472, -0.6852,
    -0.5749, 0.4472, -0.5749, -0.6852, 0.4472, -0.4472, -0.7746, 0.4472, -0.3059, -0.8405, 0.4472,
    -0.1553, -0.8808, 0.4472, -0.0000, -0.8944, 0.4472, 0.1553, -0.8808, 0.4472, 0.3059, -0.8405,
    0.4472, 0.4472, -0.7746, 0.4472, 0.5749, -0.6852, 0.4472, 0.6852, -0.5749, 0.4472, 0.7746,
    -0.4472, 0.4472, 0.8405, -0.3059, 0.4472, 0.8808, -0.1553, 0.4472, 0.4789, 0.0000, 0.8779,
    0.4716, 0.0832, 0.8779, 0.4500, 0.1638, 0.8779, 0.4147, 0.2394, 0.8779, 0.3668, 0.3078,
    0.8779, 0.3078, 0.3668, 0.8779, 0.2394, 0.4147, 0.8779, 0.1638, 0.4500, 0.8779, 0.0832,
    0.4716, 0.8779, 0.0000, 0.4789, 0.8779, -0.0832, 0.4716, 0.8779, -0.1638, 0.4500, 0.8779,
    -0.2394, 0.4147, 0.8779, -0.3078, 0.3668, 0.8779, -0.3668, 0.3078, 0.8779, -0.4147, 0.2394,
    0.8779, -0.4500, 0.1638, 0.8779, -0.4716, 0.0832, 0.8779, -0.4789, 0.0000, 0.8779, -0.4716,
    -0.0832, 0.8779, -0.4500, -0.1638, 0.8779, -0.4147, -0.2394, 0.8779, -0.3668, -0.3078, 0.8779,
    -0.3078, -0.3668, 0.8779, -0.2394, -0.4147, 0.8779, -0.1638, -0.4500, 0.8779, -0.0832,
    -0.4716, 0.8779, -0.0000, -0.4789, 0.8779, 0.0832, -0.4716, 0.8779, 0.1638, -0.4500, 0.8779,
    0.2394, -0.4147, 0.8779, 0.3078, -0.3668, 0.8779, 0.3668, -0.3078, 0.8779, 0.4147, -0.2394,
    0.8779, 0.4500, -0.1638, 0.8779, 0.4716, -0.0832, 0.8779, 0.4472, 0.0000, 0.8944, 0.4404,
    0.0777, 0.8944, 0.4202, 0.1530, 0.8944, 0.3873, 0.2236, 0.8944, 0.3426, 0.2875, 0.8944,
    0.2875, 0.3426, 0.8944, 0.2236, 0.3873, 0.8944, 0.1530, 0.4202, 0.8944, 0.0777, 0.4404,
    0.8944, 0.0000, 0.4472, 0.8944, -0.0777, 0.4404, 0.8944, -0.1530, 0.4202, 0.8944, -0.2236,
    0.3873, 0.8944, -0.2875, 0.3426, 0.8944, -0.3426, 0.2875, 0.8944, -0.3873, 0.2236, 0.8944,
    -0.4202, 0.1530, 0.8944, -0.4404, 0.0777, 0.8944, -0.4472, 0.0000, 0.8944, -0.4404, -0.0777,
    0.8944, -0.4202, -0.1530, 0.8944, -0.3873, -0.2236, 0.8944, -0.3426, -0.2875, 0.8944, -0.2875,
    -0.3426, 0.8944, -0.2236, -0.3873, 0.8944, -0.1530, -0.4202, 0.8944, -0.0777, -0.4404, 0.8944,
    -0.0000, -0.4472, 0.8944, 0.0777, -0.4404, 0.8944, 0.1530, -0.4202, 0.8944, 0.2236, -0.3873,
    0.8944, 0.2875, -0.3426, 0.8944, 0.3426, -0.2875, 0.8944, 0.3873, -0.2236, 0.8944, 0.4202,
    -0.1530, 0.8944, 0.4404, -0.0777, 0.8944, 0.4138, 0.0000, 0.9104, 0.4075, 0.0719, 0.9104,
    0.3888, 0.1415, 0.9104, 0.3584, 0.2069, 0.9104, 0.3170, 0.2660, 0.9104, 0.2660, 0.3170,
    0.9104, 0.2069, 0.3584, 0.9104, 0.1415, 0.3888, 0.9104, 0.0719, 0.4075, 0.9104, 0.0000,
    0.4138, 0.9104, -0.0719, 0.4075, 0.9104, -0.1415, 0.3888, 0.9104, -0.2069, 0.3584, 0.9104,
    -0.2660, 0.3170, 0.9104, -0.3170, 0.2660, 0.9104, -0.3584, 0.2069, 0.9104, -0.3888, 0.1415,
    0.9104, -0.4075, 0.0719, 0.9104, -0.4138, 0.0000, 0.9104, -0.4075, -0.0719, 0.9104, -0.3888,
    -0.1415, 0.9104, -0.3584, -0.2069, 0.9104, -0.3170, -0.2660, 0.9104, -0.2660, -0.3170, 0.9104,
    -0.2069, -0.3584, 0.9104, -0.1415, -0.3888, 0.9104, -0.0719, -0.4075, 0.9104, -0.0000,
    -0.4138, 0.9104, 0.0719, -0.4075, 0.9104, 0.1415, -0.3888, 0.9104, 0.2069, -0.3584, 0.9104,
    0.2660, -0.3170, 0.9104, 0.3170, -0.2660, 0.9104, 0.3584, -0.2069, 0.9104, 0.3888, -0.1415,
    0.9104, 0.4075, -0.0719, 0.9104, 0.8575, 0.0000, 0.5145, 0.8445, 0.1489, 0.5145, 0.8058,
    0.2933, 0.5145, 0.7426, 0.4287, 0.5145, 0.6569, 0.5512, 0.5145, 0.5512, 0.6569, 0.5145,
    0.4287, 0.7426, 0.5145, 0.2933, 0.8058, 0.5145, 0.1489, 0.8445, 0.5145, 0.0000, 0.8575,
    0.5145, -0.1489, 0.8445, 0.5145, -0.2933, 0.8058, 0.5145, -0.4287, 0.7426, 0.5145, -0.5512,
    0.6569, 0.5145, -0.6569, 0.5512, 0.5145, -0.7426, 0.4287, 0.5145, -0.8058, 0.2933, 0.5145,
    -0.8445, 0.1489, 0.5145, -0.8575, 0.0000, 0.5145, -0.8445, -0.1489, 0.5145, -0.8058, -0.2933,
    0.5145, -0.7426, -0.4287, 0.5145, -0.6569, -0.5512, 0.5145, -0.5512, -0.6569, 0.5145, -0.4287,
    -0.7426, 0.5145, -0.2933, -0.8058, 0.5145, -0.1489, -0.8445, 0.5145, -0.0000, -0.8575, 0.5145,
    0.1489, -0.8445, 0.5145, 0.2933, -0.8058, 0.5145, 0.4287, -0.7426, 0.5145, 0.5512, -0.6569,
    0.5145, 0.6569, -0.5512, 0.5145, 0.7426, -0.4287, 0.5145, 0.8058, -0.2933, 0.5145, 0.8445,
    -0.1489, 0.5145, 0.9978, 0.0000, 0.0665, 0.9826, 0.1733, 0.0665, 0.9376, 0.3413, 0.0665,
    0.8641, 0.4989, 0.0665, 0.7643, 0.6414, 0.0665, 0.6414, 0.7643, 0.0665, 0.4989, 0.8641,
    0.0665, 0.3413, 0.9376, 0.0665, 0.1733, 0.9826, 0.0665, 0.0000, 0.9978, 0.0665, -0.1733,
    0.9826, 0.0665, -0.3413, 0.9376, 0.0665, -0.4989, 0.8641, 0.0665, -0.6414, 0.7643, 0.0665,
    -0.7643, 0.6414, 0.0665, -0.8641, 0.4989, 0.0665, -0.9376, 0.3413, 0.0665, -0.9826, 0.1733,
    0.0665, -0.9978, 0.0000, 0.0665, -0.9826, -0.1733, 0.0665, -0.9376, -0.3413, 0.0665, -0.8641,
    -0.4989, 0.0665, -0.7643, -0.6414, 0.0665, -0.6414, -0.7643, 0.0665, -0.4989, -0.8641, 0.0665,
    -0.3413, -0.9376, 0.0665, -0.1733, -0.9826, 0.0665, -0.0000, -0.9978, 0.0665, 0.1733, -0.9826,
    0.0665, 0.3413, -0.9376, 0.0665, 0.4989, -0.8641, 0.0665, 0.6414, -0.7643, 0.0665, 0.7643,
    -0.6414, 0.0665, 0.8641, -0.4989, 0.0665, 0.9376, -0.3413, 0.0665, 0.9826, -0.1733, 0.0665,
    0.7809, 0.0000, 0.6247, 0.7690, 0.1356, 0.6247, 0.7338, 0.2671, 0.6247, 0.6763, 0.3904,
    0.6247, 0.5982, 0.5019, 0.6247, 0.5019, 0.5982, 0.6247, 0.3904, 0.6763, 0.6247, 0.2671,
    0.7338, 0.6247, 0.1356, 0.7690, 0.6247, 0.0000, 0.7809, 0.6247, -0.1356, 0.7690, 0.6247,
    -0.2671, 0.7338, 0.6247, -0.3904, 0.6763, 0.6247, -0.5019, 0.5982, 0.6247, -0.5982, 0.5019,
    0.6247, -0.6763, 0.3904, 0.6247, -0.7338, 0.2671, 0.6247, -0.7690, 0.1356, 0.6247, -0.7809,
    0.0000, 0.6247, -0.7690, -0.1356, 0.6247, -0.7338, -0.2671, 0.6247, -0.6763, -0.3904, 0.6247,
    -0.5982, -0.5019, 0.6247, -0.5019, -0.5982, 0.6247, -0.3904, -0.6763, 0.6247, -0.2671,
    -0.7338, 0.6247, -0.1356, -0.7690, 0.6247, -0.0000, -0.7809, 0.6247, 0.1356, -0.7690, 0.6247,
    0.2671, -0.7338, 0.6247, 0.3904, -0.6763, 0.6247, 0.5019, -0.5982, 0.6247, 0.5982, -0.5019,
    0.6247, 0.6763, -0.3904, 0.6247, 0.7338, -0.2671, 0.6247, 0.7690, -0.1356, 0.6247, 0.4722,
    0.0000, 0.8815, 0.4650, 0.0820, 0.8815, 0.4437, 0.1615, 0.8815, 0.4090, 0.2361, 0.8815,
    0.3617, 0.3035, 0.8815, 0.3035, 0.3617, 0.8815, 0.2361, 0.4090, 0.8815, 0.1615, 0.4437,
    0.8815, 0.0820, 0.4650, 0.8815, 0.0000, 0.4722, 0.8815, -0.0820, 0.4650, 0.8815, -0.1615,
    0.4437, 0.8815, -0.2361, 0.4090, 0.8815, -0.3035, 0.3617, 0.8815, -0.3617, 0.3035, 0.8815,
    -0.4090, 0.2361, 0.8815, -0.4437, 0.1615, 0.8815, -0.4650, 0.0820, 0.8815, -0.4722, 0.0000,
    0.8815, -0.4650, -0.0820, 0.8815, -0.4437, -0.1615, 0.8815, -0.4090, -0.2361, 0.8815, -0.3617,
    -0.3035, 0.8815, -0.3035, -0.3617, 0.8815, -0.2361, -0.4090, 0.8815, -0.1615, -0.4437, 0.8815,
    -0.0820, -0.4650, 0.8815, -0.0000, -0.4722, 0.8815, 0.0820, -0.4650, 0.8815, 0.1615, -0.4437,
    0.8815, 0.2361, -0.4090, 0.8815, 0.3035, -0.3617, 0.8815, 0.3617, -0.3035, 0.8815, 0.4090,
    -0.2361, 0.8815, 0.4437, -0.1615, 0.8815, 0.4650, -0.0820, 0.8815, 0.3162, 0.0000, 0.9487,
    0.3114, 0.0549, 0.9487, 0.2972, 0.1082, 0.9487, 0.2739, 0.1581, 0.9487, 0.2422, 0.2033,
    0.9487, 0.2033, 0.2422, 0.9487, 0.1581, 0.2739, 0.9487, 0.1082, 0.2972, 0.9487, 0.0549,
    0.3114, 0.9487, 0.0000, 0.3162, 0.9487, -0.0549, 0.3114, 0.9487, -0.1082, 0.2972, 0.9487,
    -0.1581, 0.2739, 0.9487, -0.2033, 0.2422, 0.9487, -0.2422, 0.2033, 0.9487, -0.2739, 0.1581,
    0.9487, -0.2972, 0.1082, 0.9487, -0.3114, 0.0549, 0.9487, -0.3162, 0.0000, 0.9487, -0.3114,
    -0.0549, 0.9487, -0.2972, -0.1082, 0.9487, -0.2739, -0.1581, 0.9487, -0.2422, -0.2033, 0.9487,
    -0.2033, -0.2422, 0.9487, -0.1581, -0.2739, 0.9487, -0.1082, -0.2972, 0.9487, -0.0549,
    -0.3114, 0.9487, -0.0000, -0.3162, 0.9487, 0.0549, -0.3114, 0.9487, 0.1082, -0.2972, 0.9487,
    0.1581, -0.2739, 0.9487, 0.2033, -0.2422, 0.9487, 0.2422, -0.2033, 0.9487, 0.2739, -0.1581,
    0.9487, 0.2972, -0.1082, 0.9487, 0.3114, -0.0549, 0.9487, -0.7660, 0.0000, 0.6428, -0.6634,
    0.5000, 0.5567, -0.3830, 0.8660, 0.3214, -0.0000, 1.0000, 0.0000, 0.3830, 0.8660, -0.3214,
    0.6634, 0.5000, -0.5567, 0.7660, 0.0000, -0.6428, 0.6634, -0.5000, -0.5567, 0.3830, -0.8660,
    -0.3214, 0.0000, -1.0000, -0.0000, -0.3830, -0.8660, 0.3214, -0.6634, -0.5000, 0.5567,
    -0.6378, 0.0000, 0.7702, -0.5524, 0.5000, 0.6670, -0.3189, 0.8660, 0.3851, -0.0000, 1.0000,
    0.0000, 0.3189, 0.8660, -0.3851, 0.5524, 0.5000, -0.6670, 0.6378, 0.0000, -0.7702, 0.5524,
    -0.5000, -0.6670, 0.3189, -0.8660, -0.3851, 0.0000, -1.0000, -0.0000, -0.3189, -0.8660,
    0.3851, -0.5524, -0.5000, 0.6670, -0.4888, 0.0000, 0.8724, -0.4233, 0.5000, 0.7555, -0.2444,
    0.8660, 0.4362, -0.0000, 1.0000, 0.0000, 0.2444, 0.8660, -0.4362, 0.4233, 0.5000, -0.7555,
    0.4888, 0.0000, -0.8724, 0.4233, -0.5000, -0.7555, 0.2444, -0.8660, -0.4362, 0.0000, -1.0000,
    -0.0000, -0.2444, -0.8660, 0.4362, -0.4233, -0.5000, 0.7555, -0.3237, 0.0000, 0.9461, -0.2804,
    0.5000, 0.8194, -0.1619, 0.8660, 0.4731, -0.0000, 1.0000, 0.0000, 0.1619, 0.8660, -0.4731,
    0.2804, 0.5000, -0.8194, 0.3237, 0.0000, -0.9461, 0.2804, -0.5000, -0.8194, 0.1619, -0.8660,
    -0.4731, 0.0000, -1.0000, -0.0000, -0.1619, -0.8660, 0.4731, -0.2804, -0.5000, 0.8194,
    -0.1481, 0.0000, 0.9890, -0.1283, 0.5000, 0.8565, -0.0741, 0.8660, 0.4945, -0.0000, 1.0000,
    0.0000, 0.0741, 0.8660, -0.4945, 0.1283, 0.5000, -0.8565, 0.1481, 0.0000, -0.9890, 0.1283,
    -0.5000, -0.8565, 0.0741, -0.8660, -0.4945, 0.0000, -1.0000, -0.0000, -0.0741, -0.8660,
    0.4945, -0.1283, -0.5000, 0.8565, 0.0323, 0.0000, 0.9995, 0.0280, 0.5000, 0.8656, 0.0162,
    0.8660, 0.4997, 0.0000, 1.0000, 0.0000, -0.0162, 0.8660, -0.4997, -0.0280, 0.5000, -0.8656,
    -0.0323, 0.0000, -0.9995, -0.0280, -0.5000, -0.8656, -0.0162, -0.8660, -0.4997, -0.0000,
    -1.0000, -0.0000, 0.0162, -0.8660, 0.4997, 0.0280, -0.5000, 0.8656, 0.2117, 0.0000, 0.9773,
    0.1833, 0.5000, 0.8464, 0.1059, 0.8660, 0.4887, 0.0000, 1.0000, 0.0000, -0.1059, 0.8660,
    -0.4887, -0.1833, 0.5000, -0.8464, -0.2117, 0.0000, -0.9773, -0.1833, -0.5000, -0.8464,
    -0.1059, -0.8660, -0.4887, -0.0000, -1.0000, -0.0000, 0.1059, -0.8660, 0.4887, 0.1833,
    -0.5000, 0.8464, 0.3842, 0.0000, 0.9233, 0.3327, 0.5000, 0.7996, 0.1921, 0.8660, 0.4616,
    0.0000, 1.0000, 0.0000, -0.1921, 0.8660, -0.4616, -0.3327, 0.5000, -0.7996, -0.3842, 0.0000,
    -0.9233, -0.3327, -0.5000, -0.7996, -0.1921, -0.8660, -0.4616, -0.0000, -1.0000, -0.0000,
    0.1921, -0.8660, 0.4616, 0.3327, -0.5000, 0.7996, 0.5441, 0.0000, 0.8390, 0.4712, 0.5000,
    0.7266, 0.2720, 0.8660, 0.4195, 0.0000, 1.0000, 0.0000, -0.2720, 0.8660, -0.4195, -0.4712,
    0.5000, -0.7266, -0.5441, 0.0000, -0.8390, -0.4712, -0.5000, -0.7266, -0.2720, -0.8660,
    -0.4195, -0.0000, -1.0000, -0.0000, 0.2720, -0.8660, 0.4195, 0.4712, -0.5000, 0.7266, 0.6862,
    0.0000, 0.7274, 0.5943, 0.5000, 0.6299, 0.3431, 0.8660, 0.3637, 0.0000, 1.0000, 0.0000,
    -0.3431, 0.8660, -0.3637, -0.5943, 0.5000, -0.6299, -0.6862, 0.0000, -0.7274, -0.5943,
    -0.5000, -0.6299, -0.3431, -0.8660, -0.3637, -0.0000, -1.0000, -0.0000, 0.3431, -0.8660,
    0.3637, 0.5943, -0.5000, 0.6299, 0.8060, 0.0000, 0.5920, 0.6980, 0.5000, 0.5127, 0.4030,
    0.8660, 0.2960, 0.0000, 1.0000, 0.0000, -0.4030, 0.8660, -0.2960, -0.6980, 0.5000, -0.5127,
    -0.8060, 0.0000, -0.5920, -0.6980, -0.5000, -0.5127, -0.4030, -0.8660, -0.2960, -0.0000,
    -1.0000, -0.0000, 0.4030, -0.8660, 0.2960, 0.6980, -0.5000, 0.5127, 0.8994, 0.0000, 0.4372,
    0.7789, 0.5000, 0.3786, 0.4497, 0.8660, 0.2186, 0.0000, 1.0000, 0.0000, -0.4497, 0.8660,
    -0.2186, -0.7789, 0.5000, -0.3786, -0.8994, 0.0000, -0.4372, -0.7789, -0.5000, -0.3786,
    -0.4497, -0.8660, -0.2186, -0.0000, -1.0000, -0.0000, 0.4497, -0.8660, 0.2186, 0.7789,
    -0.5000, 0.3786, 0.9634, 0.0000, 0.2682, 0.8343, 0.5000, 0.2322, 0.4817, 0.8660, 0.1341,
    0.0000, 1.0000, 0.0000, -0.4817, 0.8660, -0.1341, -0.8343, 0.5000, -0.2322, -0.9634, 0.0000,
    -0.2682, -0.8343, -0.5000, -0.2322, -0.4817, -0.8660, -0.1341, -0.0000, -1.0000, -0.0000,
    0.4817, -0.8660, 0.1341, 0.8343, -0.5000, 0.2322, 0.9959, 0.0000, 0.0904, 0.8625, 0.5000,
    0.0783, 0.4980, 0.8660, 0.0452, 0.0000, 1.0000, 0.0000, -0.4980, 0.8660, -0.0452, -0.8625,
    0.5000, -0.0783, -0.9959, 0.0000, -0.0904, -0.8625, -0.5000, -0.0783, -0.4980, -0.8660,
    -0.0452, -0.0000, -1.0000, -0.0000, 0.4980, -0.8660, 0.0452, 0.8625, -0.5000, 0.0783, 0.9959,
    0.0000, -0.0904, 0.8625, 0.5000, -0.0783, 0.4980, 0.8660, -0.0452, 0.0000, 1.0000, -0.0000,
    -0.4980, 0.8660, 0.0452, -0.8625, 0.5000, 0.0783, -0.9959, 0.0000, 0.0904, -0.8625, -0.5000,
    0.0783, -0.4980, -0.8660, 0.0452, -0.0000, -1.0000, 0.0000, 0.4980, -0.8660, -0.0452, 0.8625,
    -0.5000, -0.0783, 0.9634, 0.0000, -0.2682, 0.8343, 0.5000, -0.2322, 0.4817, 0.8660, -0.1341,
    0.0000, 1.0000, -0.0000, -0.4817, 0.8660, 0.1341, -0.8343, 0.5000, 0.2322, -0.9634, 0.0000,
    0.2682, -0.8343, -0.5000, 0.2322, -0.4817, -0.8660, 0.1341, -0.0000, -1.0000, 0.0000, 0.4817,
    -0.8660, -0.1341, 0.8343, -0.5000, -0.2322, 0.8994, 0.0000, -0.4372, 0.7789, 0.5000, -0.3786,
    0.4497, 0.8660, -0.2186, 0.0000, 1.0000, -0.0000, -0.4497, 0.8660, 0.2186, -0.7789, 0.5000,
    0.3786, -0.8994, 0.0000, 0.4372, -0.7789, -0.5000, 0.3786, -0.4497, -0.8660, 0.2186, -0.0000,
    -1.0000, 0.0000, 0.4497, -0.8660, -0.2186, 0.7789, -0.5000, -0.3786, 0.8060, 0.0000, -0.5920,
    0.6980, 0.5000, -0.5127, 0.4030, 0.8660, -0.2960, 0.0000, 1.0000, -0.0000, -0.4030, 0.8660,
    0.2960, -0.6980, 0.5000, 0.5127, -0.8060, 0.0000, 0.5920, -0.6980, -0.5000, 0.5127, -0.4030,
    -0.8660, 0.2960, -0.0000, -1.0000, 0.0000, 0.4030, -0.8660, -0.2960, 0.6980, -0.5000, -0.5127,
    0.6862, 0.0000, -0.7274, 0.5943, 0.5000, -0.6299, 0.3431, 0.8660, -0.3637, 0.0000, 1.0000,
    -0.0000, -0.3431, 0.8660, 0.3637, -0.5943, 0.5000, 0.6299, -0.6862, 0.0000, 0.7274, -0.5943,
    -0.5000, 0.6299, -0.3431, -0.8660, 0.3637, -0.0000, -1.0000, 0.0000, 0.3431, -0.8660, -0.3637,
    0.5943, -0.5000, -0.6299, 0.5441, 0.0000, -0.8390, 0.4712, 0.5000, -0.7266, 0.2720, 0.8660,
    -0.4195, 0.0000, 1.0000, -0.0000, -0.2720, 0.8660, 0.4195, -0.4712, 0.5000, 0.7266, -0.5441,
    0.0000, 0.8390, -0.4712, -0.5000, 0.7266, -0.2720, -0.8660, 0.4195, -0.0000, -1.0000, 0.0000,
    0.2720, -0.8660, -0.4195, 0.4712, -0.5000, -0.7266, 0.3842, 0.0000, -0.9233, 0.3327, 0.5000,
    -0.7996, 0.1921, 0.8660, -0.4616, 0.0000, 1.0000, -0.0000, -0.1921, 0.8660, 0.4616, -0.3327,
    0.5000, 0.7996, -0.3842, 0.0000, 0.9233, -0.3327, -0.5000, 0.7996, -0.1921, -0.8660, 0.4616,
    -0.0000, -1.0000, 0.0000, 0.1921, -0.8660, -0.4616, 0.3327, -0.5000, -0.7996, 0.2117, 0.0000,
    -0.9773, 0.1833, 0.5000, -0.8464, 0.1059, 0.8660, -0.4887, 0.0000, 1.0000, -0.0000, -0.1059,
    0.8660, 0.4887, -0.1833, 0.5000, 0.8464, -0.2117, 0.0000, 0.9773, -0.1833, -0.5000, 0.8464,
    -0.1059, -0.8660, 0.4887, -0.0000, -1.0000, 0.0000, 0.1059, -0.8660, -0.4887, 0.1833, -0.5000,
    -0.8464, 0.0323, 0.0000, -0.9995, 0.0280, 0.5000, -0.8656, 0.0162, 0.8660, -0.4997, 0.0000,
    1.0000, -0.0000, -0.0162, 0.8660, 0.4997, -0.0280, 0.5000, 0.8656, -0.0323, 0.0000, 0.9995,
    -0.0280, -0.5000, 0.8656, -0.0162, -0.8660, 0.4997, -0.0000, -1.0000, 0.0000, 0.0162, -0.8660,
    -0.4997, 0.0280, -0.5000, -0.8656, -0.1481, 0.0000, -0.9890, -0.1283, 0.5000, -0.8565,
    -0.0741, 0.8660, -0.4945, -0.0000, 1.0000, -0.0000, 0.0741, 0.8660, 0.4945, 0.1283, 0.5000,
    0.8565, 0.1481, 0.0000, 0.9890, 0.1283, -0.5000, 0.8565, 0.0741, -0.8660, 0.4945, 0.0000,
    -1.0000, 0.0000, -0.0741, -0.8660, -0.4945, -0.1283, -0.5000, -0.8565, -0.3237, 0.0000,
    -0.9461, -0.2804, 0.5000, -0.8194, -0.1619, 0.8660, -0.4731, -0.0000, 1.0000, -0.0000, 0.1619,
    0.8660, 0.4731, 0.2804, 0.5000, 0.8194, 0.3237, 0.0000, 0.9461, 0.2804, -0.5000, 0.8194,
    0.1619, -0.8660, 0.4731, 0.0000, -1.0000, 0.0000, -0.1619, -0.8660, -0.4731, -0.2804, -0.5000,
    -0.8194, -0.4888, 0.0000, -0.8724, -0.4233, 0.5000, -0.7555, -0.2444, 0.8660, -0.4362,
    -0.0000, 1.0000, -0.0000, 0.2444, 0.8660, 0.4362, 0.4233, 0.5000, 0.7555, 0.4888, 0.0000,
    0.8724, 0.4233, -0.5000, 0.7555, 0.2444, -0.8660, 0.4362, 0.0000, -1.0000, 0.0000, -0.2444,
    -0.8660, -0.4362, -0.4233, -0.5000, -0.7555, -0.6378, 0.0000, -0.7702, -0.5524, 0.5000,
    -0.6670, -0.3189, 0.8660, -0.3851, -0.0000, 1.0000, -0.0000, 0.3189, 0.8660, 0.3851, 0.5524,
    0.5000, 0.6670, 0.6378, 0.0000, 0.7702, 0.5524, -0.5000, 0.6670, 0.3189, -0.8660, 0.3851,
    0.0000, -1.0000, 0.0000, -0.3189, -0.8660, -0.3851, -0.5524, -0.5000, -0.6670, -0.7660,
    0.0000, -0.6428, -0.6634, 0.5000, -0.5567, -0.3830, 0.8660, -0.3214, -0.0000, 1.0000, -0.0000,
    0.3830, 0.8660, 0.3214, 0.6634, 0.5000, 0.5567, 0.7660, 0.0000, 0.6428, 0.6634, -0.5000,
    0.5567, 0.3830, -0.8660, 0.3214, 0.0000, -1.0000, 0.0000, -0.3830, -0.8660, -0.3214, -0.6634,
    -0.5000, -0.5567, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402,
    -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000,
    -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000,
    -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000,
    0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346,
    0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402,
    0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000,
    0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664,
    0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893,
    0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346,
    -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402,
    -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000,
    -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000,
    -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000,
    0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346,
    0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402,
    0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000,
    0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664,
    0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893,
    0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346,
    -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402,
    -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000,
    -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000,
    -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000,
    0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346,
    0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402,
    0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, 0.0000,
    0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664,
    0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893,
    0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000, -0.3664, -0.8660, 0.3402, -0.6346,
    -0.5000, 0.5893, -0.7328, 0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402,
    -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000,
    -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, -0.0000,
    -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893,
];

pub static TEAPOT_TANGENTS: [f32; 3528] = [
    -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660,
    0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397,
    0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000,
    -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428,
    -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000,
    -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660,
    0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397,
    -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000,
    0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660,
    0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000,
    1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000,
    -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420,
    0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397,
    -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000,
    -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000,
    -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000,
    0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420,
    0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397,
    0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000,
    0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000,
    0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428,
    0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000,
    -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420,
    0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000,
    -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000,
    0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660,
    0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848,
    -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000,
    0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660,
    0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736,
    0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000,
    -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736,
    0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660,
    -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000,
    -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848,
    0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660,
    -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000,
    1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000,
    0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420,
    0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000,
    -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428,
    0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000,
    0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000,
    -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420,
    -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000,
    0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428,
    0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000,
    -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000,
    0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397,
    0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420,
    0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000,
    -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000,
    0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660,
    -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000,
    -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397,
    0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660,
    -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000,
    0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428,
    0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736,
    0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000,
    -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000,
    0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848,
    -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000,
    -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736,
    -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000,
    0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000,
    0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848,
    0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000,
    0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848,
    0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000,
    0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000,
    -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736,
    0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428,
    -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000,
    -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660,
    0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397,
    -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000,
    0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660,
    0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000,
    1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000,
    -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420,
    0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397,
    -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000,
    -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000,
    -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000,
    0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420,
    0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397,
    0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000,
    0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000,
    0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428,
    0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000,
    -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420,
    0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000,
    -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000,
    0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660,
    0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848,
    -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000,
    0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660,
    0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736,
    0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000,
    -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736,
    0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660,
    -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000,
    -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848,
    0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660,
    -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000,
    1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000,
    0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420,
    0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000,
    -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428,
    0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000,
    0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000,
    -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420,
    -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000,
    0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428,
    0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000,
    -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000,
    0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397,
    0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420,
    0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000,
    -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000,
    0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660,
    -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000,
    -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397,
    0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660,
    -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000,
    0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428,
    0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736,
    0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000,
    -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000,
    0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848,
    -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000,
    -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736,
    -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000,
    0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000,
    0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848,
    0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000,
    0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848,
    0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000,
    0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000,
    -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736,
    0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428,
    -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000,
    -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660,
    0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397,
    -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000,
    0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660,
    0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000,
    1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000,
    -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420,
    0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397,
    -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000,
    -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000,
    -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000,
    0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420,
    0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397,
    0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000,
    0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000,
    0.0000, -0.1736, 0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428,
    0.7660, 0.0000, -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000,
    -0.9848, 0.1736, 0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420,
    0.0000, -0.8660, -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000,
    -0.8660, 0.0000, -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000,
    0.1736, -0.9848, 0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660,
    0.0000, 0.7660, -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848,
    -0.1736, 0.0000, 1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000,
    0.8660, 0.5000, 0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660,
    0.0000, 0.3420, 0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736,
    0.9848, 0.0000, -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000,
    -0.7660, 0.6428, 0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736,
    0.0000, -1.0000, 0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660,
    -0.5000, 0.0000, -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000,
    -0.3420, -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848,
    0.0000, 0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660,
    -0.6428, 0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000,
    1.0000, -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000,
    0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420,
    0.9397, 0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000,
    -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428,
    0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000,
    0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000,
    -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420,
    -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000,
    0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428,
    0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000,
    -0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000,
    0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397,
    0.0000, 0.1736, 0.9848, 0.0000, -0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000, -0.3420,
    0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428, 0.0000,
    -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000, 0.0000,
    0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000, -0.7660,
    -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420, -0.9397, 0.0000,
    -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000, 0.3420, -0.9397,
    0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428, 0.0000, 0.8660,
    -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 1.0000, -0.0000, 0.0000,
    0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000, 0.0000, 0.7660, 0.6428,
    0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420, 0.9397, 0.0000, 0.1736,
    0.9848, 0.0000, 0.0000, -1.0000, 0.0000, -0.3830, -0.8660, 0.3214, -0.6634, -0.5000, 0.5567,
    -0.7660, -0.0000, 0.6428, -0.6634, 0.5000, 0.5567, -0.3830, 0.8660, 0.3214, -0.0000, 1.0000,
    0.0000, 0.3830, 0.8660, -0.3214, 0.6634, 0.5000, -0.5567, 0.7660, 0.0000, -0.6428, 0.6634,
    -0.5000, -0.5567, 0.3830, -0.8660, -0.3214, 0.0000, -1.0000, 0.0000, -0.3189, -0.8660, 0.3851,
    -0.5524, -0.5000, 0.6670, -0.6378, -0.0000, 0.7702, -0.5524, 0.5000, 0.6670, -0.3189, 0.8660,
    0.3851, -0.0000, 1.0000, 0.0000, 0.3189, 0.8660, -0.3851, 0.5524, 0.5000, -0.6670, 0.6378,
    0.0000, -0.7702, 0.5524, -0.5000, -0.6670, 0.3189, -0.8660, -0.3851, 0.0000, -1.0000, 0.0000,
    -0.2444, -0.8660, 0.4362, -0.4233, -0.5000, 0.7555, -0.4888, -0.0000, 0.8724, -0.4233, 0.5000,
    0.7555, -0.2444, 0.8660, 0.4362, -0.0000, 1.0000, 0.0000, 0.2444, 0.8660, -0.4362, 0.4233,
    0.5000, -0.7555, 0.4888, 0.0000, -0.8724, 0.4233, -0.5000, -0.7555, 0.2444, -0.8660, -0.4362,
    0.0000, -1.0000, 0.0000, -0.1619, -0.8660, 0.4731, -0.2804, -0.5000, 0.8194, -0.3237, -0.0000,
    0.9461, -0.2804, 0.5000, 0.8194, -0.1619, 0.8660, 0.4731, -0.0000, 1.0000, 0.0000, 0.1619,
    0.8660, -0.4731, 0.2804, 0.5000, -0.8194, 0.3237, 0.0000, -0.9461, 0.2804, -0.5000, -0.8194,
    0.1619, -0.8660, -0.4731, 0.0000, -1.0000, 0.0000, -0.0741, -0.8660, 0.4945, -0.1283, -0.5000,
    0.8565, -0.1481, -0.0000, 0.9890, -0.1283, 0.5000, 0.8565, -0.0741, 0.8660, 0.4945, -0.0000,
    1.0000, 0.0000, 0.0741, 0.8660, -0.4945, 0.1283, 0.5000, -0.8565, 0.1481, 0.0000, -0.9890,
    0.1283, -0.5000, -0.8565, 0.0741, -0.8660, -0.4945, 0.0000, -1.0000, 0.0000, 0.0162, -0.8660,
    0.4997, 0.0280, -0.5000, 0.8656, 0.0323, -0.0000, 0.9995, 0.0280, 0.5000, 0.8656, 0.0162,
    0.8660, 0.4997, 0.0000, 1.0000, 0.0000, -0.0162, 0.8660, -0.4997, -0.0280, 0.5000, -0.8656,
    -0.0323, 0.0000, -0.9995, -0.0280, -0.5000, -0.8656, -0.0162, -0.8660, -0.4997, 0.0000,
    -1.0000, 0.0000, 0.1059, -0.8660, 0.4887, 0.1833, -0.5000, 0.8464, 0.2117, -0.0000, 0.9773,
    0.1833, 0.5000, 0.8464, 0.1059, 0.8660, 0.4887, 0.0000, 1.0000, 0.0000, -0.1059, 0.8660,
    -0.4887, -0.1833, 0.5000, -0.8464, -0.2117, 0.0000, -0.9773, -0.1833, -0.5000, -0.8464,
    -0.1059, -0.8660, -0.4887, 0.0000, -1.0000, 0.0000, 0.1921, -0.8660, 0.4616, 0.3327, -0.5000,
    0.7996, 0.3842, -0.0000, 0.9233, 0.3327, 0.5000, 0.7996, 0.1921, 0.8660, 0.4616, 0.0000,
    1.0000, 0.0000, -0.1921, 0.8660, -0.4616, -0.3327, 0.5000, -0.7996, -0.3842, 0.0000, -0.9233,
    -0.3327, -0.5000, -0.7996, -0.1921, -0.8660, -0.4616, 0.0000, -1.0000, 0.0000, 0.2720,
    -0.8660, 0.4195, 0.4712, -0.5000, 0.7266, 0.5441, -0.0000, 0.8390, 0.4712, 0.5000, 0.7266,
    0.2720, 0.8660, 0.4195, 0.0000, 1.0000, 0.0000, -0.2720, 0.8660, -0.4195, -0.4712, 0.5000,
    -0.7266, -0.5441, 0.0000, -0.8390, -0.4712, -0.5000, -0.7266, -0.2720, -0.8660, -0.4195,
    0.0000, -1.0000, 0.0000, 0.3431, -0.8660, 0.3637, 0.5943, -0.5000, 0.6299, 0.6862, -0.0000,
    0.7274, 0.5943, 0.5000, 0.6299, 0.3431, 0.8660, 0.3637, 0.0000, 1.0000, 0.0000, -0.3431,
    0.8660, -0.3637, -0.5943, 0.5000, -0.6299, -0.6862, 0.0000, -0.7274, -0.5943, -0.5000,
    -0.6299, -0.3431, -0.8660, -0.3637, 0.0000, -1.0000, 0.0000, 0.4030, -0.8660, 0.2960, 0.6980,
    -0.5000, 0.5127, 0.8060, -0.0000, 0.5920, 0.6980, 0.5000, 0.5127, 0.4030, 0.8660, 0.2960,
    0.0000, 1.0000, 0.0000, -0.4030, 0.8660, -0.2960, -0.6980, 0.5000, -0.5127, -0.8060, 0.0000,
    -0.5920, -0.6980, -0.5000, -0.5127, -0.4030, -0.8660, -0.2960, 0.0000, -1.0000, 0.0000,
    0.4497, -0.8660, 0.2186, 0.7789, -0.5000, 0.3786, 0.8994, -0.0000, 0.4372, 0.7789, 0.5000,
    0.3786, 0.4497, 0.8660, 0.2186, 0.0000, 1.0000, 0.0000, -0.4497, 0.8660, -0.2186, -0.7789,
    0.5000, -0.3786, -0.8994, 0.0000, -0.4372, -0.7789, -0.5000, -0.3786, -0.4497, -0.8660,
    -0.2186, 0.0000, -1.0000, 0.0000, 0.4817, -0.8660, 0.1341, 0.8343, -0.5000, 0.2322, 0.9634,
    -0.0000, 0.2682, 0.8343, 0.5000, 0.2322, 0.4817, 0.8660, 0.1341, 0.0000, 1.0000, 0.0000,
    -0.4817, 0.8660, -0.1341, -0.8343, 0.5000, -0.2322, -0.9634, 0.0000, -0.2682, -0.8343,
    -0.5000, -0.2322, -0.4817, -0.8660, -0.1341, 0.0000, -1.0000, 0.0000, 0.4980, -0.8660, 0.0452,
    0.8625, -0.5000, 0.0783, 0.9959, -0.0000, 0.0904, 0.8625, 0.5000, 0.0783, 0.4980, 0.8660,
    0.0452, 0.0000, 1.0000, 0.0000, -0.4980, 0.8660, -0.0452, -0.8625, 0.5000, -0.0783, -0.9959,
    0.0000, -0.0904, -0.8625, -0.5000, -0.0783, -0.4980, -0.8660, -0.0452, 0.0000, -1.0000,
    -0.0000, 0.4980, -0.8660, -0.0452, 0.8625, -0.5000, -0.0783, 0.9959, -0.0000, -0.0904, 0.8625,
    0.5000, -0.0783, 0.4980, 0.8660, -0.0452, 0.0000, 1.0000, -0.0000, -0.4980, 0.8660, 0.0452,
    -0.8625, 0.5000, 0.0783, -0.9959, 0.0000, 0.0904, -0.8625, -0.5000, 0.0783, -0.4980, -0.8660,
    0.0452, 0.0000, -1.0000, -0.0000, 0.4817, -0.8660, -0.1341, 0.8343, -0.5000, -0.2322, 0.9634,
    -0.0000, -0.2682, 0.8343, 0.5000, -0.2322, 0.4817, 0.8660, -0.1341, 0.0000, 1.0000, -0.0000,
    -0.4817, 0.8660, 0.1341, -0.8343, 0.5000, 0.2322, -0.9634, 0.0000, 0.2682, -0.8343, -0.5000,
    0.2322, -0.4817, -0.8660, 0.1341, 0.0000, -1.0000, -0.0000, 0.4497, -0.8660, -0.2186, 0.7789,
    -0.5000, -0.3786, 0.8994, -0.0000, -0.4372, 0.7789, 0.5000, -0.3786, 0.4497, 0.8660, -0.2186,
    0.0000, 1.0000, -0.0000, -0.4497, 0.8660, 0.2186, -0.7789, 0.5000, 0.3786, -0.8994, 0.0000,
    0.4372, -0.7789, -0.5000, 0.3786, -0.4497, -0.8660, 0.2186, 0.0000, -1.0000, -0.0000, 0.4030,
    -0.8660, -0.2960, 0.6980, -0.5000, -0.5127, 0.8060, -0.0000, -0.5920, 0.6980, 0.5000, -0.5127,
    0.4030, 0.8660, -0.2960, 0.0000, 1.0000, -0.0000, -0.4030, 0.8660, 0.2960, -0.6980, 0.5000,
    0.5127, -0.8060, 0.0000, 0.5920, -0.6980, -0.5000, 0.5127, -0.4030, -0.8660, 0.2960, 0.0000,
    -1.0000, -0.0000, 0.3431, -0.8660, -0.3637, 0.5943, -0.5000, -0.6299, 0.6862, -0.0000,
    -0.7274, 0.5943, 0.5000, -0.6299, 0.3431, 0.8660, -0.3637, 0.0000, 1.0000, -0.0000, -0.3431,
    0.8660, 0.3637, -0.5943, 0.5000, 0.6299, -0.6862, 0.0000, 0.7274, -0.5943, -0.5000, 0.6299,
    -0.3431, -0.8660, 0.3637, 0.0000, -1.0000, -0.0000, 0.2720, -0.8660, -0.4195, 0.4712, -0.5000,
    -0.7266, 0.5441, -0.0000, -0.8390, 0.4712, 0.5000, -0.7266, 0.2720, 0.8660, -0.4195, 0.0000,
    1.0000, -0.0000, -0.2720, 0.8660, 0.4195, -0.4712, 0.5000, 0.7266, -0.5441, 0.0000, 0.8390,
    -0.4712, -0.5000, 0.7266, -0.2720, -0.8660, 0.4195, 0.0000, -1.0000, -0.0000, 0.1921, -0.8660,
    -0.4616, 0.3327, -0.5000, -0.7996, 0.3842, -0.0000, -0.9233, 0.3327, 0.5000, -0.7996, 0.1921,
    0.8660, -0.4616, 0.0000, 1.0000, -0.0000, -0.1921, 0.8660, 0.4616, -0.3327, 0.5000, 0.7996,
    -0.3842, 0.0000, 0.9233, -0.3327, -0.5000, 0.7996, -0.1921, -0.8660, 0.4616, 0.0000, -1.0000,
    -0.0000, 0.1059, -0.8660, -0.4887, 0.1833, -0.5000, -0.8464, 0.2117, -0.0000, -0.9773, 0.1833,
    0.5000, -0.8464, 0.1059, 0.8660, -0.4887, 0.0000, 1.0000, -0.0000, -0.1059, 0.8660, 0.4887,
    -0.1833, 0.5000, 0.8464, -0.2117, 0.0000, 0.9773, -0.1833, -0.5000, 0.8464, -0.1059, -0.8660,
    0.4887, 0.0000, -1.0000, -0.0000, 0.0162, -0.8660, -0.4997, 0.0280, -0.5000, -0.8656, 0.0323,
    -0.0000, -0.9995, 0.0280, 0.5000, -0.8656, 0.0162, 0.8660, -0.4997, 0.0000, 1.0000, -0.0000,
    -0.0162, 0.8660, 0.4997, -0.0280, 0.5000, 0.8656, -0.0323, 0.0000, 0.9995, -0.0280, -0.5000,
    0.8656, -0.0162, -0.8660, 0.4997, -0.0000, -1.0000, 0.0000, -0.0741, -0.8660, -0.4945,
    -0.1283, -0.5000, -0.8565, -0.1481, -0.0000, -0.9890, -0.1283, 0.5000, -0.8565, -0.0741,
    0.8660, -0.4945, -0.0000, 1.0000, -0.0000, 0.0741, 0.8660, 0.4945, 0.1283, 0.5000, 0.8565,
    0.1481, 0.0000, 0.9890, 0.1283, -0.5000, 0.8565, 0.0741, -0.8660, 0.4945, -0.0000, -1.0000,
    0.0000, -0.1619, -0.8660, -0.4731, -0.2804, -0.5000, -0.8194, -0.3237, -0.0000, -0.9461,
    -0.2804, 0.5000, -0.8194, -0.1619, 0.8660, -0.4731, -0.0000, 1.0000, -0.0000, 0.1619, 0.8660,
    0.4731, 0.2804, 0.5000, 0.8194, 0.3237, 0.0000, 0.9461, 0.2804, -0.5000, 0.8194, 0.1619,
    -0.8660, 0.4731, -0.0000, -1.0000, 0.0000, -0.2444, -0.8660, -0.4362, -0.4233, -0.5000,
    -0.7555, -0.4888, -0.0000, -0.8724, -0.4233, 0.5000, -0.7555, -0.2444, 0.8660, -0.4362,
    -0.0000, 1.0000, -0.0000, 0.2444, 0.8660, 0.4362, 0.4233, 0.5000, 0.7555, 0.4888, 0.0000,
    0.8724, 0.4233, -0.5000, 0.7555, 0.2444, -0.8660, 0.4362, -0.0000, -1.0000, 0.0000, -0.3189,
    -0.8660, -0.3851, -0.5524, -0.5000, -0.6670, -0.6378, -0.0000, -0.7702, -0.5524, 0.5000,
    -0.6670, -0.3189, 0.8660, -0.3851, -0.0000, 1.0000, -0.0000, 0.3189, 0.8660, 0.3851, 0.5524,
    0.5000, 0.6670, 0.6378, 0.0000, 0.7702, 0.5524, -0.5000, 0.6670, 0.3189, -0.8660, 0.3851,
    -0.0000, -1.0000, 0.0000, -0.3830, -0.8660, -0.3214, -0.6634, -0.5000, -0.5567, -0.7660,
    -0.0000, -0.6428, -0.6634, 0.5000, -0.5567, -0.3830, 0.8660, -0.3214, -0.0000, 1.0000,
    -0.0000, 0.3830, 0.8660, 0.3214, 0.6634, 0.5000, 0.5567, 0.7660, 0.0000, 0.6428, 0.6634,
    -0.5000, 0.5567, 0.3830, -0.8660, 0.3214, 0.0000, -1.0000, 0.0000, -0.3664, -0.8660, 0.3402,
    -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660,
    0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328,
    0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, 0.0000,
    -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000,
    0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346,
    0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402,
    0.0000, -1.0000, 0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000,
    0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664,
    0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893,
    0.3664, -0.8660, -0.3402, 0.0000, -1.0000, 0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000,
    0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000,
    1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805,
    0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, 0.0000, -0.3664, -0.8660,
    0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664,
    0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893,
    0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000,
    0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346,
    0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402,
    0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660,
    -0.3402, 0.0000, -1.0000, 0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328,
    -0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000,
    0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000,
    -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, 0.0000, -0.3664, -0.8660, 0.3402, -0.6346,
    -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402,
    -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000,
    -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000, -1.0000, 0.0000, -0.3664,
    -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805, -0.6346, 0.5000, 0.5893,
    -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660, -0.3402, 0.6346, 0.5000,
    -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664, -0.8660, -0.3402, 0.0000,
    -1.0000, 0.0000, -0.3664, -0.8660, 0.3402, -0.6346, -0.5000, 0.5893, -0.7328, -0.0000, 0.6805,
    -0.6346, 0.5000, 0.5893, -0.3664, 0.8660, 0.3402, -0.0000, 1.0000, 0.0000, 0.3664, 0.8660,
    -0.3402, 0.6346, 0.5000, -0.5893, 0.7328, 0.0000, -0.6805, 0.6346, -0.5000, -0.5893, 0.3664,
    -0.8660, -0.3402,
];

pub static TEAPOT_BINORMALS: [f32; 3528] = [
    1.0000, 0.0000, 0.0000, 0.9848, 0.1736, 0.0000, 0.9397, 0.3420, 0.0000, 0.8660, 0.5000,
    0.0000, 0.7660, 0.6428, 0.0000, 0.6428, 0.7660, 0.0000, 0.5000, 0.8660, 0.0000, 0.3420,
    0.9397, 0.0000, 0.1736, 0.9848, 0.0000, 0.0000, 1.0000, 0.0000, -0.1736, 0.9848, 0.0000,
    -0.3420, 0.9397, 0.0000, -0.5000, 0.8660, 0.0000, -0.6428, 0.7660, 0.0000, -0.7660, 0.6428,
    0.0000, -0.8660, 0.5000, 0.0000, -0.9397, 0.3420, 0.0000, -0.9848, 0.1736, 0.0000, -1.0000,
    0.0000, 0.0000, -0.9848, -0.1736, 0.0000, -0.9397, -0.3420, 0.0000, -0.8660, -0.5000, 0.0000,
    -0.7660, -0.6428, 0.0000, -0.6428, -0.7660, 0.0000, -0.5000, -0.8660, 0.0000, -0.3420,
    -0.9397, 0.0000, -0.1736, -0.9848, 0.0000, -0.0000, -1.0000, 0.0000, 0.1736, -0.9848, 0.0000,
    0.3420, -0.9397, 0.0000, 0.5000, -0.8660, 0.0000, 0.6428, -0.7660, 0.0000, 0.7660, -0.6428,
    0.0000, 0.8660, -0.5000, 0.0000, 0.9397, -0.3420, 0.0000, 0.9848, -0.1736, 0.0000, 0.9994,
    0.0000, 0.0357, 0.9842, 0.1735, 0.0357, 0.9391, 0.3418, 0.0357, 0.8655, 0.4997, 0.0357,
    0.7656, 0.6424, 0.0357, 0.6424, 0.7656, 0.0357, 0.4997, 0.8655, 0.0357, 0.3418, 0.9391,
    0.0357, 0.1735, 0.9842, 0.0357, 0.0000, 0.9994, 0.0357, -0.1735, 0.9842, 0.0357, -0.3418,
    0.9391, 0.0357, -0.4997, 0.8655, 0.0357, -0.6424, 0.7656, 0.0357, -0.7656, 0.6424, 0.0357,
    -0.8655, 0.4997, 0.0357, -0.9391, 0.3418, 0.0357, -0.9842, 0.1735, 0.0357, -0.9994, 0.0000,
    0.0357, -0.9842, -0.1735, 0.0357, -0.9391, -0.3418, 0.0357, -0.8655, -0.4997, 0.0357, -0.7656,
    -0.6424, 0.0357, -0.6424, -0.7656, 0.0357, -0.4997, -0.8655, 0.0357, -0.3418, -0.9391, 0.0357,
    -0.1735, -0.9842, 0.0357, -0.0000, -0.9994, 0.0357, 0.1735, -0.9842, 0.0357, 0.3418, -0.9391,
    0.0357, 0.4997, -0.8655, 0.0357, 0.6424, -0.7656, 0.0357, 0.7656, -0.6424, 0.0357, 0.8655,
    -0.4997, 0.0357, 0.9391, -0.3418, 0.0357, 0.9842, -0.1735, 0.0357, 0.9762, 0.0000, 0.2169,
    0.9614, 0.1695, 0.2169, 0.9173, 0.3339, 0.2169, 0.8454, 0.4881, 0.2169, 0.7478, 0.6275,
    0.2169, 0.6275, 0.7478, 0.2169, 0.4881, 0.8454, 0.2169, 0.3339, 0.9173, 0.2169, 0.1695,
    0.9614, 0.2169, 0.0000, 0.9762, 0.2169, -0.1695, 0.9614, 0.2169, -0.3339, 0.9173, 0.2169,
    -0.4881, 0.8454, 0.2169, -0.6275, 0.7478, 0.2169, -0.7478, 0.6275, 0.2169, -0.8454, 0.4881,
    0.2169, -0.9173, 0.3339, 0.2169, -0.9614, 0.1695, 0.2169, -0.9762, 0.0000, 0.2169, -0.9614,
    -0.1695, 0.2169, -0.9173, -0.3339, 0.2169, -0.8454, -0.4881, 0.2169, -0.7478, -0.6275, 0.2169,
    -0.6275, -0.7478, 0.2169, -0.4881, -0.8454, 0.2169, -0.3339, -0.9173, 0.2169, -0.1695,
    -0.9614, 0.2169, -0.0000, -0.9762, 0.2169, 0.1695, -0.9614, 0.2169, 0.3339, -0.9173, 0.2169,
    0.4881, -0.8454, 0.2169, 0.6275, -0.7478, 0.2169, 0.7478, -0.6275, 0.2169, 0.8454, -0.4881,
    0.2169, 0.9173, -0.3339, 0.2169, 0.9614, -0.1695, 0.2169, 0.7433, 0.0000, 0.6690, 0.7320,
    0.1291, 0.6690, 0.6985, 0.2542, 0.6690, 0.6437, 0.3716, 0.6690, 0.5694, 0.4778, 0.6690,
    0.4778, 0.5694, 0.6690, 0.3716, 0.6437, 0.6690, 0.2542, 0.6985, 0.6690, 0.1291, 0.7320,
    0.6690, 0.0000, 0.7433, 0.6690, -0.1291, 0.7320, 0.6690, -0.2542, 0.6985, 0.6690, -0.3716,
    0.6437, 0.6690, -0.4778, 0.5694, 0.6690, -0.5694, 0.4778, 0.6690, -0.6437, 0.3716, 0.6690,
    -0.6985, 0.2542, 0.6690, -0.7320, 0.1291, 0.6690, -0.7433, 0.0000, 0.6690, -0.7320, -0.1291,
    0.6690, -0.6985, -0.2542, 0.6690, -0.6437, -0.3716, 0.6690, -0.5694, -0.4778, 0.6690, -0.4778,
    -0.5694, 0.6690, -0.3716, -0.6437, 0.6690, -0.2542, -0.6985, 0.6690, -0.1291, -0.7320, 0.6690,
    -0.0000, -0.7433, 0.6690, 0.1291, -0.7320, 0.6690, 0.2542, -0.6985, 0.6690, 0.3716, -0.6437,
    0.6690, 0.4778, -0.5694, 0.6690, 0.5694, -0.4778, 0.6690, 0.6437, -0.3716, 0.6690, 0.6985,
    -0.2542, 0.6690, 0.7320, -0.1291, 0.6690, 0.3939, 0.0000, 0.9191, 0.3879, 0.0684, 0.9191,
    0.3702, 0.1347, 0.9191, 0.3411, 0.1970, 0.9191, 0.3018, 0.2532, 0.9191, 0.2532, 0.3018,
    0.9191, 0.1970, 0.3411, 0.9191, 0.1347, 0.3702, 0.9191, 0.0684, 0.3879, 0.9191, 0.0000,
    0.3939, 0.9191, -0.0684, 0.3879, 0.9191, -0.1347, 0.3702, 0.9191, -0.1970, 0.3411, 0.9191,
    -0.2532, 0.3018, 0.9191, -0.3018, 0.2532, 0.9191, -0.3411, 0.1970, 0.9191, -0.3702, 0.1347,
    0.9191, -0.3879, 0.0684, 0.9191, -0.3939, 0.0000, 0.9191, -0.3879, -0.0684, 0.9191, -0.3702,
    -0.1347, 0.9191, -0.3411, -0.1970, 0.9191, -0.3018, -0.2532, 0.9191, -0.2532, -0.3018, 0.9191,
    -0.1970, -0.3411, 0.9191, -0.1347, -0.3702, 0.9191, -0.0684, -0.3879, 0.9191, -0.0000,
    -0.3939, 0.9191, 0.0684, -0.3879, 0.9191, 0.1347, -0.3702, 0.9191, 0.1970, -0.3411, 0.9191,
    0.2532, -0.3018, 0.9191, 0.3018, -0.2532, 0.9191, 0.3411, -0.1970, 0.9191, 0.3702, -0.1347,
    0.9191, 0.3879, -0.0684, 0.9191, 0.1240, 0.0000, 0.9923, 0.1222, 0.0215, 0.9923, 0.1166,
    0.0424, 0.9923, 0.1074, 0.0620, 0.9923, 0.0950, 0.0797, 0.9923, 0.0797, 0.0950, 0.9923,
    0.0620, 0.1074, 0.9923, 0.0424, 0.1166, 0.9923, 0.0215, 0.1222, 0.9923, 0.0000, 0.1240,
    0.9923, -0.0215, 0.1222, 0.9923, -0.0424, 0.1166, 0.9923, -0.0620, 0.1074, 0.9923, -0.0797,
    0.0950, 0.9923, -0.0950, 0.0797, 0.9923, -0.1074, 0.0620, 0.9923, -0.1166, 0.0424, 0.9923,
    -0.1222, 0.0215, 0.9923, -0.1240, 0.0000, 0.9923, -0.1222, -0.0215, 0.9923, -0.1166, -0.0424,
    0.9923, -0.1074, -0.0620, 0.9923, -0.0950, -0.0797, 0.9923, -0.0797, -0.0950, 0.9923, -0.0620,
    -0.1074, 0.9923, -0.0424, -0.1166, 0.9923, -0.0215, -0.1222, 0.9923, -0.0000, -0.1240, 0.9923,
    0.0215, -0.1222, 0.9923, 0.0424, -0.1166, 0.9923, 0.0620, -0.1074, 0.9923, 0.0797, -0.0950,
    0.9923, 0.0950, -0.0797, 0.9923, 0.1074, -0.0620, 0.9923, 0.1166, -0.0424, 0.9923, 0.1222,
    -0.0215, 0.9923, -0.1843, -0.0000, 0.9829, -0.1815, -0.0320, 0.9829, -0.1732, -0.0630, 0.9829,
    -0.1596, -0.0921, 0.9829, -0.1412, -0.1185, 0.9829, -0.1185, -0.1412, 0.9829, -0.0921,
    -0.1596, 0.9829, -0.0630, -0.1732, 0.9829, -0.0320, -0.1815, 0.9829, -0.0000, -0.1843, 0.9829,
    0.0320, -0.1815, 0.9829, 0.0630, -0.1732, 0.9829, 0.0921, -0.1596, 0.9829, 0.1185, -0.1412,
    0.9829, 0.1412, -0.1185, 0.9829, 0.1596, -0.0921, 0.9829, 0.1732, -0.0630, 0.9829, 0.1815,
    -0.0320, 0.9829, 0.1843, -0.0000, 0.9829, 0.1815, 0.0320, 0.9829, 0.1732, 0.0630, 0.9829,
    0.1596, 0.0921, 0.9829, 0.1412, 0.1185, 0.9829, 0.1185, 0.1412, 0.9829, 0.0921, 0.1596,
    0.9829, 0.0630, 0.1732, 0.9829, 0.0320, 0.1815, 0.9829, 0.0000, 0.1843, 0.9829, -0.0320,
    0.1815, 0.9829, -0.0630, 0.1732, 0.9829, -0.0921, 0.1596, 0.9829, -0.1185, 0.1412, 0.9829,
    -0.1412, 0.1185, 0.9829, -0.1596, 0.0921, 0.9829, -0.1732, 0.0630, 0.9829, -0.1815, 0.0320,
    0.9829, -0.4706, -0.0000, 0.8824, -0.4634, -0.0817, 0.8824, -0.4422, -0.1610, 0.8824, -0.4075,
    -0.2353, 0.8824, -0.3605, -0.3025, 0.8824, -0.3025, -0.3605, 0.8824, -0.2353, -0.4075, 0.8824,
    -0.1610, -0.4422, 0.8824, -0.0817, -0.4634, 0.8824, -0.0000, -0.4706, 0.8824, 0.0817, -0.4634,
    0.8824, 0.1610, -0.4422, 0.8824, 0.2353, -0.4075, 0.8824, 0.3025, -0.3605, 0.8824, 0.3605,
    -0.3025, 0.8824, 0.4075, -0.2353, 0.8824, 0.4422, -0.1610, 0.8824, 0.4634, -0.0817, 0.8824,
    0.4706, -0.0000, 0.8824, 0.4634, 0.0817, 0.8824, 0.4422, 0.1610, 0.8824, 0.4075, 0.2353,
    0.8824, 0.3605, 0.3025, 0.8824, 0.3025, 0.3605, 0.8824, 0.2353, 0.4075, 0.8824, 0.1610,
    0.4422, 0.8824, 0.0817, 0.4634, 0.8824, 0.0000, 0.4706, 0.8824, -0.0817, 0.4634, 0.8824,
    -0.1610, 0.4422, 0.8824, -0.2353, 0.4075, 0.8824, -0.3025, 0.3605, 0.8824, -0.3605, 0.3025,
    0.8824, -0.4075, 0.2353, 0.8824, -0.4422, 0.1610, 0.8824, -0.4634, 0.0817, 0.8824, -0.6402,
    -0.0000, 0.7682, -0.6305, -0.1112, 0.7682, -0.6016, -0.2190, 0.7682, -0.5544, -0.3201, 0.7682,
    -0.4904, -0.4115, 0.7682, -0.4115, -0.4904, 0.7682, -0.3201, -0.5544, 0.7682, -0.2190,
    -0.6016, 0.7682, -0.1112, -0.6305, 0.7682, -0.0000, -0.6402, 0.7682, 0.1112, -0.6305, 0.7682,
    0.2190, -0.6016, 0.7682, 0.3201, -0.5544, 0.7682, 0.4115, -0.4904, 0.7682, 0.4904, -0.4115,
    0.7682, 0.5544, -0.3201, 0.7682, 0.6016, -0.2190, 0.7682, 0.6305, -0.1112, 0.7682, 0.6402,
    -0.0000, 0.7682, 0.6305, 0.1112, 0.7682, 0.6016, 0.2190, 0.7682, 0.5544, 0.3201, 0.7682,
    0.4904, 0.4115, 0.7682, 0.4115, 0.4904, 0.7682, 0.3201, 0.5544, 0.7682, 0.2190, 0.6016,
    0.7682, 0.1112, 0.6305, 0.7682, 0.0000, 0.6402, 0.7682, -0.1112, 0.6305, 0.7682, -0.2190,
    0.6016, 0.7682, -0.3201, 0.5544, 0.7682, -0.4115, 0.4904, 0.7682, -0.4904, 0.4115, 0.7682,
    -0.5544, 0.3201, 0.7682, -0.6016, 0.2190, 0.7682, -0.6305, 0.1112, 0.7682, -0.6508, -0.0000,
    0.7593, -0.6409, -0.1130, 0.7593, -0.6115, -0.2226, 0.7593, -0.5636, -0.3254, 0.7593, -0.4985,
    -0.4183, 0.7593, -0.4183, -0.4985, 0.7593, -0.3254, -0.5636, 0.7593, -0.2226, -0.6115, 0.7593,
    -0.1130, -0.6409, 0.7593, -0.0000, -0.6508, 0.7593, 0.1130, -0.6409, 0.7593, 0.2226, -0.6115,
    0.7593, 0.3254, -0.5636, 0.7593, 0.4183, -0.4985, 0.7593, 0.4985, -0.4183, 0.7593, 0.5636,
    -0.3254, 0.7593, 0.6115, -0.2226, 0.7593, 0.6409, -0.1130, 0.7593, 0.6508, -0.0000, 0.7593,
    0.6409, 0.1130, 0.7593, 0.6115, 0.2226, 0.7593, 0.5636, 0.3254, 0.7593, 0.4985, 0.4183,
    0.7593, 0.4183, 0.4985, 0.7593, 0.3254, 0.5636, 0.7593, 0.2226, 0.6115, 0.7593, 0.1130,
    0.6409, 0.7593, 0.0000, 0.6508, 0.7593, -0.1130, 0.6409, 0.7593, -0.2226, 0.6115, 0.7593,
    -0.3254, 0.5636, 0.7593, -0.4183, 0.4985, 0.7593, -0.4985, 0.4183, 0.7593, -0.5636, 0.3254,
    0.7593, -0.6115, 0.2226, 0.7593, -0.6409, 0.1130, 0.7593, 0.2425, 0.0000, 0.9701, 0.2389,
    0.0421, 0.9701, 0.2279, 0.0830, 0.9701, 0.2100, 0.1213, 0.9701, 0.1858, 0.1559, 0.9701,
    0.1559, 0.1858, 0.9701, 0.1213, 0.2100, 0.9701, 0.0830, 0.2279, 0.9701, 0.0421, 0.2389,
    0.9701, 0.0000, 0.2425, 0.9701, -0.0421, 0.2389, 0.9701, -0.0830, 0.2279, 0.9701, -0.1213,
    0.2100, 0.9701, -0.1559, 0.1858, 0.9701, -0.1858, 0.1559, 0.9701, -0.2100, 0.1213, 0.9701,
    -0.2279, 0.0830, 0.9701, -0.2389, 0.0421, 0.9701, -0.2425, 0.0000, 0.9701, -0.2389, -0.0421,
    0.9701, -0.2279, -0.0830, 0.9701, -0.2100, -0.1213, 0.9701, -0.1858, -0.1559, 0.9701, -0.1559,
    -0.1858, 0.9701, -0.1213, -0.2100, 0.9701, -0.0830, -0.2279, 0.9701, -0.0421, -0.2389, 0.9701,
    -0.0000, -0.2425, 0.9701, 0.0421, -0.2389, 0.9701, 0.0830, -0.2279, 0.9701, 0.1213, -0.2100,
    0.9701, 0.1559, -0.1858, 0.9701, 0.1858, -0.1559, 0.9701, 0.2100, -0.1213, 0.9701, 0.2279,
    -0.0830, 0.9701, 0.2389, -0.0421, 0.9701, -0.4472, -0.0000, 0.8944, -0.4404, -0.0777, 0.8944,
    -0.4202, -0.1530, 0.8944, -0.3873, -0.2236, 0.8944, -0.3426, -0.2875, 0.8944, -0.2875,
    -0.3426, 0.8944, -0.2236, -0.3873, 0.8944, -0.1530, -0.4202, 0.8944, -0.0777, -0.4404, 0.8944,
    -0.0000, -0.4472, 0.8944, 0.0777, -0.4404, 0.8944, 0.1530, -0.4202, 0.8944, 0.2236, -0.3873,
    0.8944, 0.2875, -0.3426, 0.8944, 0.3426, -0.2875, 0.8944, 0.3873, -0.2236, 0.8944, 0.4202,
    -0.1530, 0.8944, 0.4404, -0.0777, 0.8944, 0.4472, -0.0000, 0.8944, 0.4404, 0.0777, 0.8944,
    0.4202, 0.1530, 0.8944, 0.3873, 0.2236, 0.8944, 0.3426, 0.2875, 0.8944, 0.2875, 0.3426,
    0.8944, 0.2236, 0.3873, 0.8944, 0.1530, 0.4202, 0.8944, 0.0777, 0.4404, 0.8944, 0.0000,
    0.4472, 0.8944, -0.0777, 0.4404, 0.8944, -0.1530, 0.4202, 0.8944, -0.2236, 0.3873, 0.8944,
    -0.2875, 0.3426, 0.8944, -0.3426, 0.2875, 0.8944, -0.3873, 0.2236, 0.8944, -0.4202, 0.1530,
    0.8944, -0.4404, 0.0777, 0.8944, -0.8779, -0.0000, 0.4789, -0.8646, -0.1524, 0.4789, -0.8250,
    -0.3003, 0.4789, -0.7603, -0.4389, 0.4789, -0.6725, -0.5643, 0.4789, -0.5643, -0.6725, 0.4789,
    -0.4389, -0.7603, 0.4789, -0.3003, -0.8250, 0.4789, -0.1524, -0.8646, 0.4789, -0.0000,
    -0.8779, 0.4789, 0.1524, -0.8646, 0.4789, 0.3003, -0.8250, 0.4789, 0.4389, -0.7603, 0.4789,
    0.5643, -0.6725, 0.4789, 0.6725, -0.5643, 0.4789, 0.7603, -0.4389, 0.4789, 0.8250, -0.3003,
    0.4789, 0.8646, -0.1524, 0.4789, 0.8779, -0.0000, 0.4789, 0.8646, 0.1524, 0.4789, 0.8250,
    0.3003, 0.4789, 0.7603, 0.4389, 0.4789, 0.6725, 0.5643, 0.4789, 0.5643, 0.6725, 0.4789,
    0.4389, 0.7603, 0.4789, 0.3003, 0.8250, 0.4789, 0.1524, 0.8646, 0.4789, 0.0000, 0.8779,
    0.4789, -0.1524, 0.8646, 0.4789, -0.3003, 0.8250, 0.4789, -0.4389, 0.7603, 0.4789, -0.5643,
    0.6725, 0.4789, -0.6725, 0.5643, 0.4789, -0.7603, 0.4389, 0.4789, -0.8250, 0.3003, 0.4789,
    -0.8646, 0.1524, 0.4789, -0.8944, -0.0000, 0.4472, -0.8808, -0.1553, 0.4472, -0.8405, -0.3059,
    0.4472, -0.7746, -0.4472, 0.4472, -0.6852, -0.5749, 0.4472, -0.5749, -0.6852, 0.4472, -0.4472,
    -0.7746, 0.4472, -0.3059, -0.8405, 0.4472, -0.1553, -0.8808, 0.4472, -0.0000, -0.8944, 0.4472,
    0.1553, -0.8808, 0.4472, 0.3059, -0.8405, 0.4472, 0.4472, -0.7746, 0.4472, 0.5749, -0.6852,
    0.4472, 0.6852, -0.5749, 0.4472, 0.7746, -0.4472, 0.4472, 0.8405, -0.3059, 0.4472, 0.8808,
    -0.1553, 0.4472, 0.8944, -0.0000, 0.4472, 0.8808, 0.1553, 0.4472, 0.8405, 0.3059, 0.4472,
    0.7746, 0.4472, 0.4472, 0.6852, 0.5749, 0.4472, 0.5749, 0.6852, 0.4472, 0.4472, 0.7746,
    0.4472, 0.3059, 0.8405, 0.4472, 0.1553, 0.8808, 0.4472, 0.0000, 0.8944, 0.4472, -0.1553,
    0.8808, 0.4472, -0.3059, 0.8405, 0.4472, -0.4472, 0.7746, 0.4472, -0.5749, 0.6852, 0.4472,
    -0.6852, 0.5749, 0.4472, -0.7746, 0.4472, 0.4472, -0.8405, 0.3059, 0.4472, -0.8808, 0.1553,
    0.4472, -0.9104, -0.0000, 0.4138, -0.8965, -0.1581, 0.4138, -0.8555, -0.3114, 0.4138, -0.7884,
    -0.4552, 0.4138, -0.6974, -0.5852, 0.4138, -0.5852, -0.6974, 0.4138, -0.4552, -0.7884, 0.4138,
    -0.3114, -0.8555, 0.4138, -0.1581, -0.8965, 0.4138, -0.0000, -0.9104, 0.4138, 0.1581, -0.8965,
    0.4138, 0.3114, -0.8555, 0.4138, 0.4552, -0.7884, 0.4138, 0.5852, -0.6974, 0.4138, 0.6974,
    -0.5852, 0.4138, 0.7884, -0.4552, 0.4138, 0.8555, -0.3114, 0.4138, 0.8965, -0.1581, 0.4138,
    0.9104, -0.0000, 0.4138, 0.8965, 0.1581, 0.4138, 0.8555, 0.3114, 0.4138, 0.7884, 0.4552,
    0.4138, 0.6974, 0.5852, 0.4138, 0.5852, 0.6974, 0.4138, 0.4552, 0.7884, 0.4138, 0.3114,
    0.8555, 0.4138, 0.1581, 0.8965, 0.4138, 0.0000, 0.9104, 0.4138, -0.1581, 0.8965, 0.4138,
    -0.3114, 0.8555, 0.4138, -0.4552, 0.7884, 0.4138, -0.5852, 0.6974, 0.4138, -0.6974, 0.5852,
    0.4138, -0.7884, 0.4552, 0.4138, -0.8555, 0.3114, 0.4138, -0.8965, 0.1581, 0.4138, -0.5145,
    -0.0000, 0.8575, -0.5067, -0.0893, 0.8575, -0.4835, -0.1760, 0.8575, -0.4456, -0.2572, 0.8575,
    -0.3941, -0.3307, 0.8575, -0.3307, -0.3941, 0.8575, -0.2572, -0.4456, 0.8575, -0.1760,
    -0.4835, 0.8575, -0.0893, -0.5067, 0.8575, -0.0000, -0.5145, 0.8575, 0.0893, -0.5067, 0.8575,
    0.1760, -0.4835, 0.8575, 0.2572, -0.4456, 0.8575, 0.3307, -0.3941, 0.8575, 0.3941, -0.3307,
    0.8575, 0.4456, -0.2572, 0.8575, 0.4835, -0.1760, 0.8575, 0.5067, -0.0893, 0.8575, 0.5145,
    -0.0000, 0.8575, 0.5067, 0.0893, 0.8575, 0.4835, 0.1760, 0.8575, 0.4456, 0.2572, 0.8575,
    0.3941, 0.3307, 0.8575, 0.3307, 0.3941, 0.8575, 0.2572, 0.4456, 0.8575, 0.1760, 0.4835,
    0.8575, 0.0893, 0.5067, 0.8575, 0.0000, 0.5145, 0.8575, -0.0893, 0.5067, 0.8575, -0.1760,
    0.4835, 0.8575, -0.2572, 0.4456, 0.8575, -0.3307, 0.3941, 0.8575, -0.3941, 0.3307, 0.8575,
    -0.4456, 0.2572, 0.8575, -0.4835, 0.1760, 0.8575, -0.5067, 0.0893, 0.8575, -0.0665, -0.0000,
    0.9978, -0.0655, -0.0116, 0.9978, -0.0625, -0.0228, 0.9978, -0.0576, -0.0333, 0.9978, -0.0510,
    -0.0428, 0.9978, -0.0428, -0.0510, 0.9978, -0.0333, -0.0576, 0.9978, -0.0228, -0.0625, 0.9978,
    -0.0116, -0.0655, 0.9978, -0.0000, -0.0665, 0.9978, 0.0116, -0.0655, 0.9978, 0.0228, -0.0625,
    0.9978, 0.0333, -0.0576, 0.9978, 0.0428, -0.0510, 0.9978, 0.0510, -0.0428, 0.9978, 0.0576,
    -0.0333, 0.9978, 0.0625, -0.0228, 0.9978, 0.0655, -0.0116, 0.9978, 0.0665, -0.0000, 0.9978,
    0.0655, 0.0116, 0.9978, 0.0625, 0.0228, 0.9978, 0.0576, 0.0333, 0.9978, 0.0510, 0.0428,
    0.9978, 0.0428, 0.0510, 0.9978, 0.0333, 0.0576, 0.9978, 0.0228, 0.0625, 0.9978, 0.0116,
    0.0655, 0.9978, 0.0000, 0.0665, 0.9978, -0.0116, 0.0655, 0.9978, -0.0228, 0.0625, 0.9978,
    -0.0333, 0.0576, 0.9978, -0.0428, 0.0510, 0.9978, -0.0510, 0.0428, 0.9978, -0.0576, 0.0333,
    0.9978, -0.0625, 0.0228, 0.9978, -0.0655, 0.0116, 0.9978, -0.6247, -0.0000, 0.7809, -0.6152,
    -0.1085, 0.7809, -0.5870, -0.2137, 0.7809, -0.5410, -0.3123, 0.7809, -0.4785, -0.4015, 0.7809,
    -0.4015, -0.4785, 0.7809, -0.3123, -0.5410, 0.7809, -0.2137, -0.5870, 0.7809, -0.1085,
    -0.6152, 0.7809, -0.0000, -0.6247, 0.7809, 0.1085, -0.6152, 0.7809, 0.2137, -0.5870, 0.7809,
    0.3123, -0.5410, 0.7809, 0.4015, -0.4785, 0.7809, 0.4785, -0.4015, 0.7809, 0.5410, -0.3123,
    0.7809, 0.5870, -0.2137, 0.7809, 0.6152, -0.1085, 0.7809, 0.6247, -0.0000, 0.7809, 0.6152,
    0.1085, 0.7809, 0.5870, 0.2137, 0.7809, 0.5410, 0.3123, 0.7809, 0.4785, 0.4015, 0.7809,
    0.4015, 0.4785, 0.7809, 0.3123, 0.5410, 0.7809, 0.2137, 0.5870, 0.7809, 0.1085, 0.6152,
    0.7809, 0.0000, 0.6247, 0.7809, -0.1085, 0.6152, 0.7809, -0.2137, 0.5870, 0.7809, -0.3123,
    0.5410, 0.7809, -0.4015, 0.4785, 0.7809, -0.4785, 0.4015, 0.7809, -0.5410, 0.3123, 0.7809,
    -0.5870, 0.2137, 0.7809, -0.6152, 0.1085, 0.7809, -0.8815, -0.0000, 0.4722, -0.8681, -0.1531,
    0.4722, -0.8283, -0.3015, 0.4722, -0.7634, -0.4407, 0.4722, -0.6753, -0.5666, 0.4722, -0.5666,
    -0.6753, 0.4722, -0.4407, -0.7634, 0.4722, -0.3015, -0.8283, 0.4722, -0.1531, -0.8681, 0.4722,
    -0.0000, -0.8815, 0.4722, 0.1531, -0.8681, 0.4722, 0.3015, -0.8283, 0.4722, 0.4407, -0.7634,
    0.4722, 0.5666, -0.6753, 0.4722, 0.6753, -0.5666, 0.4722, 0.7634, -0.4407, 0.4722, 0.8283,
    -0.3015, 0.4722, 0.8681, -0.1531, 0.4722, 0.8815, -0.0000, 0.4722, 0.8681, 0.1531, 0.4722,
    0.8283, 0.3015, 0.4722, 0.7634, 0.4407, 0.4722, 0.6753, 0.5666, 0.4722, 0.5666, 0.6753,
    0.4722, 0.4407, 0.7634, 0.4722, 0.3015, 0.8283, 0.4722, 0.1531, 0.8681, 0.4722, 0.0000,
    0.8815, 0.4722, -0.1531, 0.8681, 0.4722, -0.3015, 0.8283, 0.4722, -0.4407, 0.7634, 0.4722,
    -0.5666, 0.6753, 0.4722, -0.6753, 0.5666, 0.4722, -0.7634, 0.4407, 0.4722, -0.8283, 0.3015,
    0.4722, -0.8681, 0.1531, 0.4722, -0.9487, -0.0000, 0.3162, -0.9343, -0.1647, 0.3162, -0.8915,
    -0.3245, 0.3162, -0.8216, -0.4743, 0.3162, -0.7267, -0.6098, 0.3162, -0.6098, -0.7267, 0.3162,
    -0.4743, -0.8216, 0.3162, -0.3245, -0.8915, 0.3162, -0.1647, -0.9343, 0.3162, -0.0000,
    -0.9487, 0.3162, 0.1647, -0.9343, 0.3162, 0.3245, -0.8915, 0.3162, 0.4743, -0.8216, 0.3162,
    0.6098, -0.7267, 0.3162, 0.7267, -0.6098, 0.3162, 0.8216, -0.4743, 0.3162, 0.8915, -0.3245,
    0.3162, 0.9343, -0.1647, 0.3162, 0.9487, -0.0000, 0.3162, 0.9343, 0.1647, 0.3162, 0.8915,
    0.3245, 0.3162, 0.8216, 0.4743, 0.3162, 0.7267, 0.6098, 0.3162, 0.6098, 0.7267, 0.3162,
    0.4743, 0.8216, 0.3162, 0.3245, 0.8915, 0.3162, 0.1647, 0.9343, 0.3162, 0.0000, 0.9487,
    0.3162, -0.1647, 0.9343, 0.3162, -0.3245, 0.8915, 0.3162, -0.4743, 0.8216, 0.3162, -0.6098,
    0.7267, 0.3162, -0.7267, 0.6098, 0.3162, -0.8216, 0.4743, 0.3162, -0.8915, 0.3245, 0.3162,
    -0.9343, 0.1647, 0.3162, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000,
    0.7660, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.6428,
    0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660,
    0.6428, 0.0000, 0.7660, 0.6428, 0.0000, 0.7660, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000,
    0.6378, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.7702,
    0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378,
    0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.7702, 0.0000, 0.6378, 0.8724, 0.0000,
    0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724,
    0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888,
    0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000, 0.4888, 0.8724, 0.0000,
    0.4888, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461,
    0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237,
    0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000, 0.3237, 0.9461, 0.0000,
    0.3237, 0.9461, 0.0000, 0.3237, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9890,
    0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481,
    0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000,
    0.1481, 0.9890, 0.0000, 0.1481, 0.9890, 0.0000, 0.1481, 0.9995, 0.0000, -0.0323, 0.9995,
    0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323,
    0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000,
    -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9995, 0.0000, -0.0323, 0.9773,
    0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117,
    0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000,
    -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773, 0.0000, -0.2117, 0.9773,
    0.0000, -0.2117, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842,
    0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000,
    -0.3842, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.9233,
    0.0000, -0.3842, 0.9233, 0.0000, -0.3842, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441,
    0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000,
    -0.5441, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.8390,
    0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.8390, 0.0000, -0.5441, 0.7274, 0.0000, -0.6862,
    0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000,
    -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274,
    0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862, 0.7274, 0.0000, -0.6862,
    0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000,
    -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920,
    0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060, 0.5920, 0.0000, -0.8060,
    0.5920, 0.0000, -0.8060, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000,
    -0.8994, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.4372,
    0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994,
    0.4372, 0.0000, -0.8994, 0.4372, 0.0000, -0.8994, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000,
    -0.9634, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.2682,
    0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634,
    0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.2682, 0.0000, -0.9634, 0.0904, 0.0000,
    -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904,
    0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959,
    0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000, -0.9959, 0.0904, 0.0000,
    -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959,
    -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000,
    -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959,
    -0.0904, 0.0000, -0.9959, -0.0904, 0.0000, -0.9959, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000,
    -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634,
    -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000,
    -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634, -0.2682, 0.0000, -0.9634,
    -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000,
    -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994,
    -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000, -0.8994, -0.4372, 0.0000,
    -0.8994, -0.4372, 0.0000, -0.8994, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060,
    -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000,
    -0.8060, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060,
    -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060, -0.5920, 0.0000, -0.8060, -0.7274, 0.0000,
    -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862,
    -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000,
    -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862, -0.7274, 0.0000, -0.6862,
    -0.7274, 0.0000, -0.6862, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000,
    -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441,
    -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000,
    -0.5441, -0.8390, 0.0000, -0.5441, -0.8390, 0.0000, -0.5441, -0.9233, 0.0000, -0.3842,
    -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000,
    -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842,
    -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000, -0.3842, -0.9233, 0.0000,
    -0.3842, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117,
    -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000,
    -0.2117, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117,
    -0.9773, 0.0000, -0.2117, -0.9773, 0.0000, -0.2117, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000,
    -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323,
    -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000,
    -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323, -0.9995, 0.0000, -0.0323,
    -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000,
    0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890,
    0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481, -0.9890, 0.0000, 0.1481,
    -0.9890, 0.0000, 0.1481, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000,
    0.3237, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.9461,
    0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237,
    -0.9461, 0.0000, 0.3237, -0.9461, 0.0000, 0.3237, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000,
    0.4888, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.8724,
    0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888,
    -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.8724, 0.0000, 0.4888, -0.7702, 0.0000,
    0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702,
    0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378,
    -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000, 0.6378, -0.7702, 0.0000,
    0.6378, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428,
    0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660,
    -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000, 0.7660, -0.6428, 0.0000,
    0.7660, -0.6428, 0.0000, 0.7660, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805,
    0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328,
    0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000, 0.7328, 0.6805, 0.0000,
    0.7328,
];

pub static TEAPOT_TEXCOORDS: [f32; 3528] = [
    0.0000, 0.0000, 0.0000, 0.0278, 0.0000, 0.0000, 0.0556, 0.0000, 0.0000, 0.0833, 0.0000,
    0.0000, 0.1111, 0.0000, 0.0000, 0.1389, 0.0000, 0.0000, 0.1667, 0.0000, 0.0000, 0.1944,
    0.0000, 0.0000, 0.2222, 0.0000, 0.0000, 0.2500, 0.0000, 0.0000, 0.2778, 0.0000, 0.0000,
    0.3056, 0.0000, 0.0000, 0.3333, 0.0000, 0.0000, 0.3611, 0.0000, 0.0000, 0.3889, 0.0000,
    0.0000, 0.4167, 0.0000, 0.0000, 0.4444, 0.0000, 0.0000, 0.4722, 0.0000, 0.0000, 0.5000,
    0.0000, 0.0000, 0.5278, 0.0000, 0.0000, 0.5556, 0.0000, 0.0000, 0.5833, 0.0000, 0.0000,
    0.6111, 0.0000, 0.0000, 0.6389, 0.0000, 0.0000, 0.6667, 0.0000, 0.0000, 0.6944, 0.0000,
    0.0000, 0.7222, 0.0000, 0.0000, 0.7500, 0.0000, 0.0000, 0.7778, 0.0000, 0.0000, 0.8056,
    0.0000, 0.0000, 0.8333, 0.0000, 0.0000, 0.8611, 0.0000, 0.0000, 0.8889, 0.0000, 0.0000,
    0.9167, 0.0000, 0.0000, 0.9444, 0.0000, 0.0000, 0.9722, 0.0000, 0.0000, 0.0000, 0.0526,
    0.0000, 0.0278, 0.0526, 0.0000, 0.0556, 0.0526, 0.0000, 0.0833, 0.0526, 0.0000, 0.1111,
    0.0526, 0.0000, 0.1389, 0.0526, 0.0000, 0.1667, 0.0526, 0.0000, 0.1944, 0.0526, 0.0000,
    0.2222, 0.0526, 0.0000, 0.2500, 0.0526, 0.0000, 0.2778, 0.0526, 0.0000, 0.3056, 0.0526,
    0.0000, 0.3333, 0.0526, 0.0000, 0.3611, 0.0526, 0.0000, 0.3889, 0.0526, 0.0000, 0.4167,
    0.0526, 0.0000, 0.4444, 0.0526, 0.0000, 0.4722, 0.0526, 0.0000, 0.5000, 0.0526, 0.0000,
    0.5278, 0.0526, 0.0000, 0.5556, 0.0526, 0.0000, 0.5833, 0.0526, 0.0000, 0.6111, 0.0526,
    0.0000, 0.6389, 0.0526, 0.0000, 0.6667, 0.0526, 0.0000, 0.6944, 0.0526, 0.0000, 0.7222,
    0.0526, 0.0000, 0.7500, 0.0526, 0.0000, 0.7778, 0.0526, 0.0000, 0.8056, 0.0526, 0.0000,
    0.8333, 0.0526, 0.0000, 0.8611, 0.0526, 0.0000, 0.8889, 0.0526, 0.0000, 0.9167, 0.0526,
    0.0000, 0.9444, 0.0526, 0.0000, 0.9722, 0.0526, 0.0000, 0.0000, 0.1053, 0.0000, 0.0278,
    0.1053, 0.0000, 0.0556, 0.1053, 0.0000, 0.0833, 0.1053, 0.0000, 0.1111, 0.1053, 0.0000,
    0.1389, 0.1053, 0.0000, 0.1667, 0.1053, 0.0000, 0.1944, 0.1053, 0.0000, 0.2222, 0.1053,
    0.0000, 0.2500, 0.1053, 0.0000, 0.2778, 0.1053, 0.0000, 0.3056, 0.1053, 0.0000, 0.3333,
    0.1053, 0.0000, 0.3611, 0.1053, 0.0000, 0.3889, 0.1053, 0.0000, 0.4167, 0.1053, 0.0000,
    0.4444, 0.1053, 0.0000, 0.4722, 0.1053, 0.0000, 0.5000, 0.1053, 0.0000, 0.5278, 0.1053,
    0.0000, 0.5556, 0.1053, 0.0000, 0.5833, 0.1053, 0.0000, 0.6111, 0.1053, 0.0000, 0.6389,
    0.1053, 0.0000, 0.6667, 0.1053, 0.0000, 0.6944, 0.1053, 0.0000, 0.7222, 0.1053, 0.0000,
    0.7500, 0.1053, 0.0000, 0.7778, 0.1053, 0.0000, 0.8056, 0.1053, 0.0000, 0.8333, 0.1053,
    0.0000, 0.8611, 0.1053, 0.0000, 0.8889, 0.1053, 0.0000, 0.9167, 0.1053, 0.0000, 0.9444,
    0.1053, 0.0000, 0.9722, 0.1053, 0.0000, 0.0000, 0.1579, 0.0000, 0.0278, 0.1579, 0.0000,
    0.0556, 0.1579, 0.0000, 0.0833, 0.1579, 0.0000, 0.1111, 0.1579, 0.0000, 0.1389, 0.1579,
    0.0000, 0.1667, 0.1579, 0.0000, 0.1944, 0.1579, 0.0000, 0.2222, 0.1579, 0.0000, 0.2500,
    0.1579, 0.0000, 0.2778, 0.1579, 0.0000, 0.3056, 0.1579, 0.0000, 0.3333, 0.1579, 0.0000,
    0.3611, 0.1579, 0.0000, 0.3889, 0.1579, 0.0000, 0.4167, 0.1579, 0.0000, 0.4444, 0.1579,
    0.0000, 0.4722, 0.1579, 0.0000, 0.5000, 0.1579, 0.0000, 0.5278, 0.1579, 0.0000, 0.5556,
    0.1579, 0.0000, 0.5833, 0.1579, 0.0000, 0.6111, 0.1579, 0.0000, 0.6389, 0.1579, 0.0000,
    0.6667, 0.1579, 0.0000, 0.6944, 0.1579, 0.0000, 0.7222, 0.1579, 0.0000, 0.7500, 0.1579,
    0.0000, 0.7778, 0.1579, 0.0000, 0.8056, 0.1579, 0.0000, 0.8333, 0.1579, 0.0000, 0.8611,
    0.1579, 0.0000, 0.8889, 0.1579, 0.0000, 0.9167, 0.1579, 0.0000, 0.9444, 0.1579, 0.0000,
    0.9722, 0.1579, 0.0000, 0.0000, 0.2105, 0.0000, 0.0278, 0.2105, 0.0000, 0.0556, 0.2105,
    0.0000, 0.0833, 0.2105, 0.0000, 0.1111, 0.2105, 0.0000, 0.1389, 0.2105, 0.0000, 0.1667,
    0.2105, 0.0000, 0.1944, 0.2105, 0.0000, 0.2222, 0.2105, 0.0000, 0.2500, 0.2105, 0.0000,
    0.2778, 0.2105, 0.0000, 0.3056, 0.2105, 0.0000, 0.3333, 0.2105, 0.0000, 0.3611, 0.2105,
    0.0000, 0.3889, 0.2105, 0.0000, 0.4167, 0.2105, 0.0000, 0.4444, 0.2105, 0.0000, 0.4722,
    0.2105, 0.0000, 0.5000, 0.2105, 0.0000, 0.5278, 0.2105, 0.0000, 0.5556, 0.2105, 0.0000,
    0.5833, 0.2105, 0.0000, 0.6111, 0.2105, 0.0000, 0.6389, 0.2105, 0.0000, 0.6667, 0.2105,
    0.0000, 0.6944, 0.2105, 0.0000, 0.7222, 0.2105, 0.0000, 0.7500, 0.2105, 0.0000, 0.7778,
    0.2105, 0.0000, 0.8056, 0.2105, 0.0000, 0.8333, 0.2105, 0.0000, 0.8611, 0.2105, 0.0000,
    0.8889, 0.2105, 0.0000, 0.9167, 0.2105, 0.0000, 0.9444, 0.2105, 0.0000, 0.9722, 0.2105,
    0.0000, 0.0000, 0.2632, 0.0000, 0.0278, 0.2632, 0.0000, 0.0556, 0.2632, 0.0000, 0.0833,
    0.2632, 0.0000, 0.1111, 0.2632, 0.0000, 0.1389, 0.2632, 0.0000, 0.1667, 0.2632, 0.0000,
    0.1944, 0.2632, 0.0000, 0.2222, 0.2632, 0.0000, 0.2500, 0.2632, 0.0000, 0.2778, 0.2632,
    0.0000, 0.3056, 0.2632, 0.0000, 0.3333, 0.2632, 0.0000, 0.3611, 0.2632, 0.0000, 0.3889,
    0.2632, 0.0000, 0.4167, 0.2632, 0.0000, 0.4444, 0.2632, 0.0000, 0.4722, 0.2632, 0.0000,
    0.5000, 0.2632, 0.0000, 0.5278, 0.2632, 0.0000, 0.5556, 0.2632, 0.0000, 0.5833, 0.2632,
    0.0000, 0.6111, 0.2632, 0.0000, 0.6389, 0.2632, 0.0000, 0.6667, 0.2632, 0.0000, 0.6944,
    0.2632, 0.0000, 0.7222, 0.2632, 0.0000, 0.7500, 0.2632, 0.0000, 0.7778, 0.2632, 0.0000,
    0.8056, 0.2632, 0.0000, 0.8333, 0.2632, 0.0000, 0.8611, 0.2632, 0.0000, 0.8889, 0.2632,
    0.0000, 0.9167, 0.2632, 0.0000, 0.9444, 0.2632, 0.0000, 0.9722, 0.2632, 0.0000, 0.0000,
    0.3158, 0.0000, 0.0278, 0.3158, 0.0000, 0.0556, 0.3158, 0.0000, 0.0833, 0.3158, 0.0000,
    0.1111, 0.3158, 0.0000, 0.1389, 0.3158, 0.0000, 0.1667, 0.3158, 0.0000, 0.1944, 0.3158,
    0.0000, 0.2222, 0.3158, 0.0000, 0.2500, 0.3158, 0.0000, 0.2778, 0.3158, 0.0000, 0.3056,
    0.3158, 0.0000, 0.3333, 0.3158, 0.0000, 0.3611, 0.3158, 0.0000, 0.3889, 0.3158, 0.0000,
    0.4167, 0.3158, 0.0000, 0.4444, 0.3158, 0.0000, 0.4722, 0.3158, 0.0000, 0.5000, 0.3158,
    0.0000, 0.5278, 0.3158, 0.0000, 0.5556, 0.3158, 0.0000, 0.5833, 0.3158, 0.0000, 0.6111,
    0.3158, 0.0000, 0.6389, 0.3158, 0.0000, 0.6667, 0.3158, 0.0000, 0.6944, 0.3158, 0.0000,
    0.7222, 0.3158, 0.0000, 0.7500, 0.3158, 0.0000, 0.7778, 0.3158, 0.0000, 0.8056, 0.3158,
    0.0000, 0.8333, 0.3158, 0.0000, 0.8611, 0.3158, 0.0000, 0.8889, 0.3158, 0.0000, 0.9167,
    0.3158, 0.0000, 0.9444, 0.3158, 0.0000, 0.9722, 0.3158, 0.0000, 0.0000, 0.3684, 0.0000,
    0.0278, 0.3684, 0.0000, 0.0556, 0.3684, 0.0000, 0.0833, 0.3684, 0.0000, 0.1111, 0.3684,
    0.0000, 0.1389, 0.3684, 0.0000, 0.1667, 0.3684, 0.0000, 0.1944, 0.3684, 0.0000, 0.2222,
    0.3684, 0.0000, 0.2500, 0.3684, 0.0000, 0.2778, 0.3684, 0.0000, 0.3056, 0.3684, 0.0000,
    0.3333, 0.3684, 0.0000, 0.3611, 0.3684, 0.0000, 0.3889, 0.3684, 0.0000, 0.4167, 0.3684,
    0.0000, 0.4444, 0.3684, 0.0000, 0.4722, 0.3684, 0.0000, 0.5000, 0.3684, 0.0000, 0.5278,
    0.3684, 0.0000, 0.5556, 0.3684, 0.0000, 0.5833, 0.3684, 0.0000, 0.6111, 0.3684, 0.0000,
    0.6389, 0.3684, 0.0000, 0.6667, 0.3684, 0.0000, 0.6944, 0.3684, 0.0000, 0.7222, 0.3684,
    0.0000, 0.7500, 0.3684, 0.0000, 0.7778, 0.3684, 0.0000, 0.8056, 0.3684, 0.0000, 0.8333,
    0.3684, 0.0000, 0.8611, 0.3684, 0.0000, 0.8889, 0.3684, 0.0000, 0.9167, 0.3684, 0.0000,
    0.9444, 0.3684, 0.0000, 0.9722, 0.3684, 0.0000, 0.0000, 0.4211, 0.0000, 0.0278, 0.4211,
    0.0000, 0.0556, 0.4211, 0.0000, 0.0833, 0.4211, 0.0000, 0.1111, 0.4211, 0.0000, 0.1389,
    0.4211, 0.0000, 0.1667, 0.4211, 0.0000, 0.1944, 0.4211, 0.0000, 0.2222, 0.4211, 0.0000,
    0.2500, 0.4211, 0.0000, 0.2778, 0.4211, 0.0000, 0.3056, 0.4211, 0.0000, 0.3333, 0.4211,
    0.0000, 0.3611, 0.4211, 0.0000, 0.3889, 0.4211, 0.0000, 0.4167, 0.4211, 0.0000, 0.4444,
    0.4211, 0.0000, 0.4722, 0.4211, 0.0000, 0.5000, 0.4211, 0.0000, 0.5278, 0.4211, 0.0000,
    0.5556, 0.4211, 0.0000, 0.5833, 0.4211, 0.0000, 0.6111, 0.4211, 0.0000, 0.6389, 0.4211,
    0.0000, 0.6667, 0.4211, 0.0000, 0.6944, 0.4211, 0.0000, 0.7222, 0.4211, 0.0000, 0.7500,
    0.4211, 0.0000, 0.7778, 0.4211, 0.0000, 0.8056, 0.4211, 0.0000, 0.8333, 0.4211, 0.0000,
    0.8611, 0.4211, 0.0000, 0.8889, 0.4211, 0.0000, 0.9167, 0.4211, 0.0000, 0.9444, 0.4211,
    0.0000, 0.9722, 0.4211, 0.0000, 0.0000, 0.4737, 0.0000, 0.0278, 0.4737, 0.0000, 0.0556,
    0.4737, 0.0000, 0.0833, 0.4737, 0.0000, 0.1111, 0.4737, 0.0000, 0.1389, 0.4737, 0.0000,
    0.1667, 0.4737, 0.0000, 0.1944, 0.4737, 0.0000, 0.2222, 0.4737, 0.0000, 0.2500, 0.4737,
    0.0000, 0.2778, 0.4737, 0.0000, 0.3056, 0.4737, 0.0000, 0.3333, 0.4737, 0.0000, 0.3611,
    0.4737, 0.0000, 0.3889, 0.4737, 0.0000, 0.4167, 0.4737, 0.0000, 0.4444, 0.4737, 0.0000,
    0.4722, 0.4737, 0.0000, 0.5000, 0.4737, 0.0000, 0.5278, 0.4737, 0.0000, 0.5556, 0.4737,
    0.0000, 0.5833, 0.4737, 0.0000, 0.6111, 0.4737, 0.0000, 0.6389, 0.4737, 0.0000, 0.6667,
    0.4737, 0.0000, 0.6944, 0.4737, 0.0000, 0.7222, 0.4737, 0.0000, 0.7500, 0.4737, 0.0000,
    0.7778, 0.4737, 0.0000, 0.8056, 0.4737, 0.0000, 0.8333, 0.4737, 0.0000, 0.8611, 0.4737,
    0.0000, 0.8889, 0.4737, 0.0000, 0.9167, 0.4737, 0.0000, 0.9444, 0.4737, 0.0000, 0.9722,
    0.4737, 0.0000, 0.0000, 0.5263, 0.0000, 0.0278, 0.5263, 0.0000, 0.0556, 0.5263, 0.0000,
    0.0833, 0.5263, 0.0000, 0.1111, 0.5263, 0.0000, 0.1389, 0.5263, 0.0000, 0.1667, 0.5263,
    0.0000, 0.1944, 0.5263, 0.0000, 0.2222, 0.5263, 0.0000, 0.2500, 0.5263, 0.0000, 0.2778,
    0.5263, 0.0000, 0.3056, 0.5263, 0.0000, 0.3333, 0.5263, 0.0000, 0.3611, 0.5263, 0.0000,
    0.3889, 0.5263, 0.0000, 0.4167, 0.5263, 0.0000, 0.4444, 0.5263, 0.0000, 0.4722, 0.5263,
    0.0000, 0.5000, 0.5263, 0.0000, 0.5278, 0.5263, 0.0000, 0.5556, 0.5263, 0.0000, 0.5833,
    0.5263, 0.0000, 0.6111, 0.5263, 0.0000, 0.6389, 0.5263, 0.0000, 0.6667, 0.5263, 0.0000,
    0.6944, 0.5263, 0.0000, 0.7222, 0.5263, 0.0000, 0.7500, 0.5263, 0.0000, 0.7778, 0.5263,
    0.0000, 0.8056, 0.5263, 0.0000, 0.8333, 0.5263, 0.0000, 0.8611, 0.5263, 0.0000, 0.8889,
    0.5263, 0.0000, 0.9167, 0.5263, 0.0000, 0.9444, 0.5263, 0.0000, 0.9722, 0.5263, 0.0000,
    0.0000, 0.5789, 0.0000, 0.0278, 0.5789, 0.0000, 0.0556, 0.5789, 0.0000, 0.0833, 0.5789,
    0.0000, 0.1111, 0.5789, 0.0000, 0.1389, 0.5789, 0.0000, 0.1667, 0.5789, 0.0000, 0.1944,
    0.5789, 0.0000, 0.2222, 0.5789, 0.0000, 0.2500, 0.5789, 0.0000, 0.2778, 0.5789, 0.0000,
    0.3056, 0.5789, 0.0000, 0.3333, 0.5789, 0.0000, 0.3611, 0.5789, 0.0000, 0.3889, 0.5789,
    0.0000, 0.4167, 0.5789, 0.0000, 0.4444, 0.5789, 0.0000, 0.4722, 0.5789, 0.0000, 0.5000,
    0.5789, 0.0000, 0.5278, 0.5789, 0.0000, 0.5556, 0.5789, 0.0000, 0.5833, 0.5789, 0.0000,
    0.6111, 0.5789, 0.0000, 0.6389, 0.5789, 0.0000, 0.6667, 0.5789, 0.0000, 0.6944, 0.5789,
    0.0000, 0.7222, 0.5789, 0.0000, 0.7500, 0.5789, 0.0000, 0.7778, 0.5789, 0.0000, 0.8056,
    0.5789, 0.0000, 0.8333, 0.5789, 0.0000, 0.8611, 0.5789, 0.0000, 0.8889, 0.5789, 0.0000,
    0.9167, 0.5789, 0.0000, 0.9444, 0.5789, 0.0000, 0.9722, 0.5789, 0.0000, 0.0000, 0.6316,
    0.0000, 0.0278, 0.6316, 0.0000, 0.0556, 0.6316, 0.0000, 0.0833, 0.6316, 0.0000, 0.1111,
    0.6316, 0.0000, 0.1389, 0.6316, 0.0000, 0.1667, 0.6316, 0.0000, 0.1944, 0.6316, 0.0000,
    0.2222, 0.6316, 0.0000, 0.2500, 0.6316, 0.0000, 0.2778, 0.6316, 0.0000, 0.3056, 0.6316,
    0.0000, 0.3333, 0.6316, 0.0000, 0.3611, 0.6316, 0.0000, 0.3889, 0.6316, 0.0000, 0.4167,
    0.6316, 0.0000, 0.4444, 0.6316, 0.0000, 0.4722, 0.6316, 0.0000, 0.5000, 0.6316, 0.0000,
    0.5278, 0.6316, 0.0000, 0.5556, 0.6316, 0.0000, 0.5833, 0.6316, 0.0000, 0.6111, 0.6316,
    0.0000, 0.6389, 0.6316, 0.0000, 0.6667, 0.6316, 0.0000, 0.6944, 0.6316, 0.0000, 0.7222,
    0.6316, 0.0000, 0.7500, 0.6316, 0.0000, 0.7778, 0.6316, 0.0000, 0.8056, 0.6316, 0.0000,
    0.8333, 0.6316, 0.0000, 0.8611, 0.6316, 0.0000, 0.8889, 0.6316, 0.0000, 0.9167, 0.6316,
    0.0000, 0.9444, 0.6316, 0.0000, 0.9722, 0.6316, 0.0000, 0.0000, 0.6842, 0.0000, 0.0278,
    0.6842, 0.0000, 0.0556, 0.6842, 0.0000, 0.0833, 0.6842, 0.0000, 0.1111, 0.6842, 0.0000,
    0.1389, 0.6842, 0.0000, 0.1667, 0.6842, 0.0000, 0.1944, 0.6842, 0.0000, 0.2222, 0.6842,
    0.0000, 0.2500, 0.6842, 0.0000, 0.2778, 0.6842, 0.0000, 0.3056, 0.6842, 0.0000, 0.3333,
    0.6842, 0.0000, 0.3611, 0.6842, 0.0000, 0.3889, 0.6842, 0.0000, 0.4167, 0.6842, 0.0000,
    0.4444, 0.6842, 0.0000, 0.4722, 0.6842, 0.0000, 0.5000, 0.6842, 0.0000, 0.5278, 0.6842,
    0.0000, 0.5556, 0.6842, 0.0000, 0.5833, 0.6842, 0.0000, 0.6111, 0.6842, 0.0000, 0.6389,
    0.6842, 0.0000, 0.6667, 0.6842, 0.0000, 0.6944, 0.6842, 0.0000, 0.7222, 0.6842, 0.0000,
    0.7500, 0.6842, 0.0000, 0.7778, 0.6842, 0.0000, 0.8056, 0.6842, 0.0000, 0.8333, 0.6842,
    0.0000, 0.8611, 0.6842, 0.0000, 0.8889, 0.6842, 0.0000, 0.9167, 0.6842, 0.0000, 0.9444,
    0.6842, 0.0000, 0.9722, 0.6842, 0.0000, 0.0000, 0.7368, 0.0000, 0.0278, 0.7368, 0.0000,
    0.0556, 0.7368, 0.0000, 0.0833, 0.7368, 0.0000, 0.1111, 0.7368, 0.0000, 0.1389, 0.7368,
    0.0000, 0.1667, 0.7368, 0.0000, 0.1944, 0.7368, 0.0000, 0.2222, 0.7368, 0.0000, 0.2500,
    0.7368, 0.0000, 0.2778, 0.7368, 0.0000, 0.3056, 0.7368, 0.0000, 0.3333, 0.7368, 0.0000,
    0.3611, 0.7368, 0.0000, 0.3889, 0.7368, 0.0000, 0.4167, 0.7368, 0.0000, 0.4444, 0.7368,
    0.0000, 0.4722, 0.7368, 0.0000, 0.5000, 0.7368, 0.0000, 0.5278, 0.7368, 0.0000, 0.5556,
    0.7368, 0.0000, 0.5833, 0.7368, 0.0000, 0.6111, 0.7368, 0.0000, 0.6389, 0.7368, 0.0000,
    0.6667, 0.7368, 0.0000, 0.6944, 0.7368, 0.0000, 0.7222, 0.7368, 0.0000, 0.7500, 0.7368,
    0.0000, 0.7778, 0.7368, 0.0000, 0.8056, 0.7368, 0.0000, 0.8333, 0.7368, 0.0000, 0.8611,
    0.7368, 0.0000, 0.8889, 0.7368, 0.0000, 0.9167, 0.7368, 0.0000, 0.9444, 0.7368, 0.0000,
    0.9722, 0.7368, 0.0000, 0.0000, 0.7895, 0.0000, 0.0278, 0.7895, 0.0000, 0.0556, 0.7895,
    0.0000, 0.0833, 0.7895, 0.0000, 0.1111, 0.7895, 0.0000, 0.1389, 0.7895, 0.0000, 0.1667,
    0.7895, 0.0000, 0.1944, 0.7895, 0.0000, 0.2222, 0.7895, 0.0000, 0.2500, 0.7895, 0.0000,
    0.2778, 0.7895, 0.0000, 0.3056, 0.7895, 0.0000, 0.3333, 0.7895, 0.0000, 0.3611, 0.7895,
    0.0000, 0.3889, 0.7895, 0.0000, 0.4167, 0.7895, 0.0000, 0.4444, 0.7895, 0.0000, 0.4722,
    0.7895, 0.0000, 0.5000, 0.7895, 0.0000, 0.5278, 0.7895, 0.0000, 0.5556, 0.7895, 0.0000,
    0.5833, 0.7895, 0.0000, 0.6111, 0.7895, 0.0000, 0.6389, 0.7895, 0.0000, 0.6667, 0.7895,
    0.0000, 0.6944, 0.7895, 0.0000, 0.7222, 0.7895, 0.0000, 0.7500, 0.7895, 0.0000, 0.7778,
    0.7895, 0.0000, 0.8056, 0.7895, 0.0000, 0.8333, 0.7895, 0.0000, 0.8611, 0.7895, 0.0000,
    0.8889, 0.7895, 0.0000, 0.9167, 0.7895, 0.0000, 0.9444, 0.7895, 0.0000, 0.9722, 0.7895,
    0.0000, 0.0000, 0.8421, 0.0000, 0.0278, 0.8421, 0.0000, 0.0556, 0.8421, 0.0000, 0.0833,
    0.8421, 0.0000, 0.1111, 0.8421, 0.0000, 0.1389, 0.8421, 0.0000, 0.1667, 0.8421, 0.0000,
    0.1944, 0.8421, 0.0000, 0.2222, 0.8421, 0.0000, 0.2500, 0.8421, 0.0000, 0.2778, 0.8421,
    0.0000, 0.3056, 0.8421, 0.0000, 0.3333, 0.8421, 0.0000, 0.3611, 0.8421, 0.0000, 0.3889,
    0.8421, 0.0000, 0.4167, 0.8421, 0.0000, 0.4444, 0.8421, 0.0000, 0.4722, 0.8421, 0.0000,
    0.5000, 0.8421, 0.0000, 0.5278, 0.8421, 0.0000, 0.5556, 0.8421, 0.0000, 0.5833, 0.8421,
    0.0000, 0.6111, 0.8421, 0.0000, 0.6389, 0.8421, 0.0000, 0.6667, 0.8421, 0.0000, 0.6944,
    0.8421, 0.0000, 0.7222, 0.8421, 0.0000, 0.7500, 0.8421, 0.0000, 0.7778, 0.8421, 0.0000,
    0.8056, 0.8421, 0.0000, 0.8333, 0.8421, 0.0000, 0.8611, 0.8421, 0.0000, 0.8889, 0.8421,
    0.0000, 0.9167, 0.8421, 0.0000, 0.9444, 0.8421, 0.0000, 0.9722, 0.8421, 0.0000, 0.0000,
    0.8947, 0.0000, 0.0278, 0.8947, 0.0000, 0.0556, 0.8947, 0.0000, 0.0833, 0.8947, 0.0000,
    0.1111, 0.8947, 0.0000, 0.1389, 0.8947, 0.0000, 0.1667, 0.8947, 0.0000, 0.1944, 0.8947,
    0.0000, 0.2222, 0.8947, 0.0000, 0.2500, 0.8947, 0.0000, 0.2778, 0.8947, 0.0000, 0.3056,
    0.8947, 0.0000, 0.3333, 0.8947, 0.0000, 0.3611, 0.8947, 0.0000, 0.3889, 0.8947, 0.0000,
    0.4167, 0.8947, 0.0000, 0.4444, 0.8947, 0.0000, 0.4722, 0.8947, 0.0000, 0.5000, 0.8947,
    0.0000, 0.5278, 0.8947, 0.0000, 0.5556, 0.8947, 0.0000, 0.5833, 0.8947, 0.0000, 0.6111,
    0.8947, 0.0000, 0.6389, 0.8947, 0.0000, 0.6667, 0.8947, 0.0000, 0.6944, 0.8947, 0.0000,
    0.7222, 0.8947, 0.0000, 0.7500, 0.8947, 0.0000, 0.7778, 0.8947, 0.0000, 0.8056, 0.8947,
    0.0000, 0.8333, 0.8947, 0.0000, 0.8611, 0.8947, 0.0000, 0.8889, 0.8947, 0.0000, 0.9167,
    0.8947, 0.0000, 0.9444, 0.8947, 0.0000, 0.9722, 0.8947, 0.0000, 0.0000, 0.9474, 0.0000,
    0.0278, 0.9474, 0.0000, 0.0556, 0.9474, 0.0000, 0.0833, 0.9474, 0.0000, 0.1111, 0.9474,
    0.0000, 0.1389, 0.9474, 0.0000, 0.1667, 0.9474, 0.0000, 0.1944, 0.9474, 0.0000, 0.2222,
    0.9474, 0.0000, 0.2500, 0.9474, 0.0000, 0.2778, 0.9474, 0.0000, 0.3056, 0.9474, 0.0000,
    0.3333, 0.9474, 0.0000, 0.3611, 0.9474, 0.0000, 0.3889, 0.9474, 0.0000, 0.4167, 0.9474,
    0.0000, 0.4444, 0.9474, 0.0000, 0.4722, 0.9474, 0.0000, 0.5000, 0.9474, 0.0000, 0.5278,
    0.9474, 0.0000, 0.5556, 0.9474, 0.0000, 0.5833, 0.9474, 0.0000, 0.6111, 0.9474, 0.0000,
    0.6389, 0.9474, 0.0000, 0.6667, 0.9474, 0.0000, 0.6944, 0.9474, 0.0000, 0.7222, 0.9474,
    0.0000, 0.7500, 0.9474, 0.0000, 0.7778, 0.9474, 0.0000, 0.8056, 0.9474, 0.0000, 0.8333,
    0.9474, 0.0000, 0.8611, 0.9474, 0.0000, 0.8889, 0.9474, 0.0000, 0.9167, 0.9474, 0.0000,
    0.9444, 0.9474, 0.0000, 0.9722, 0.9474, 0.0000, 0.0000, 1.0000, 0.0000, 0.0278, 1.0000,
    0.0000, 0.0556, 1.0000, 0.0000, 0.0833, 1.0000, 0.0000, 0.1111, 1.0000, 0.0000, 0.1389,
    1.0000, 0.0000, 0.1667, 1.0000, 0.0000, 0.1944, 1.0000, 0.0000, 0.2222, 1.0000, 0.0000,
    0.2500, 1.0000, 0.0000, 0.2778, 1.0000, 0.0000, 0.3056, 1.0000, 0.0000, 0.3333, 1.0000,
    0.0000, 0.3611, 1.0000, 0.0000, 0.3889, 1.0000, 0.0000, 0.4167, 1.0000, 0.0000, 0.4444,
    1.0000, 0.0000, 0.4722, 1.0000, 0.0000, 0.5000, 1.0000, 0.0000, 0.5278, 1.0000, 0.0000,
    0.5556, 1.0000, 0.0000, 0.5833, 1.0000, 0.0000, 0.6111, 1.0000, 0.0000, 0.6389, 1.0000,
    0.0000, 0.6667, 1.0000, 0.0000, 0.6944, 1.0000, 0.0000, 0.7222, 1.0000, 0.0000, 0.7500,
    1.0000, 0.0000, 0.7778, 1.0000, 0.0000, 0.8056, 1.0000, 0.0000, 0.8333, 1.0000, 0.0000,
    0.8611, 1.0000, 0.0000, 0.8889, 1.0000, 0.0000, 0.9167, 1.0000, 0.0000, 0.9444, 1.0000,
    0.0000, 0.9722, 1.0000, 0.0000, 0.0000, 0.0000, 0.0000, 0.0833, 0.0000, 0.0000, 0.1667,
    0.0000, 0.0000, 0.2500, 0.0000, 0.0000, 0.3333, 0.0000, 0.0000, 0.4167, 0.0000, 0.0000,
    0.5000, 0.0000, 0.0000, 0.5833, 0.0000, 0.0000, 0.6667, 0.0000, 0.0000, 0.7500, 0.0000,
    0.0000, 0.8333, 0.0000, 0.0000, 0.9167, 0.0000, 0.0000, 0.0000, 0.0370, 0.0000, 0.0833,
    0.0370, 0.0000, 0.1667, 0.0370, 0.0000, 0.2500, 0.0370, 0.0000, 0.3333, 0.0370, 0.0000,
    0.4167, 0.0370, 0.0000, 0.5000, 0.0370, 0.0000, 0.5833, 0.0370, 0.0000, 0.6667, 0.0370,
    0.0000, 0.7500, 0.0370, 0.0000, 0.8333, 0.0370, 0.0000, 0.9167, 0.0370, 0.0000, 0.0000,
    0.0741, 0.0000, 0.0833, 0.0741, 0.0000, 0.1667, 0.0741, 0.0000, 0.2500, 0.0741, 0.0000,
    0.3333, 0.0741, 0.0000, 0.4167, 0.0741, 0.0000, 0.5000, 0.0741, 0.0000, 0.5833, 0.0741,
    0.0000, 0.6667, 0.0741, 0.0000, 0.7500, 0.0741, 0.0000, 0.8333, 0.0741, 0.0000, 0.9167,
    0.0741, 0.0000, 0.0000, 0.1111, 0.0000, 0.0833, 0.1111, 0.0000, 0.1667, 0.1111, 0.0000,
    0.2500, 0.1111, 0.0000, 0.3333, 0.1111, 0.0000, 0.4167, 0.1111, 0.0000, 0.5000, 0.1111,
    0.0000, 0.5833, 0.1111, 0.0000, 0.6667, 0.1111, 0.0000, 0.7500, 0.1111, 0.0000, 0.8333,
    0.1111, 0.0000, 0.9167, 0.1111, 0.0000, 0.0000, 0.1481, 0.0000, 0.0833, 0.1481, 0.0000,
    0.1667, 0.1481, 0.0000, 0.2500, 0.1481, 0.0000, 0.3333, 0.1481, 0.0000, 0.4167, 0.1481,
    0.0000, 0.5000, 0.1481, 0.0000, 0.5833, 0.1481, 0.0000, 0.6667, 0.1481, 0.0000, 0.7500,
    0.1481, 0.0000, 0.8333, 0.1481, 0.0000, 0.9167, 0.1481, 0.0000, 0.0000, 0.1852, 0.0000,
    0.0833, 0.1852, 0.0000, 0.1667, 0.1852, 0.0000, 0.2500, 0.1852, 0.0000, 0.3333, 0.1852,
    0.0000, 0.4167, 0.1852, 0.0000, 0.5000, 0.1852, 0.0000, 0.5833, 0.1852, 0.0000, 0.6667,
    0.1852, 0.0000, 0.7500, 0.1852, 0.0000, 0.8333, 0.1852, 0.0000, 0.9167, 0.1852, 0.0000,
    0.0000, 0.2222, 0.0000, 0.0833, 0.2222, 0.0000, 0.1667, 0.2222, 0.0000, 0.2500, 0.2222,
    0.0000, 0.3333, 0.2222, 0.0000, 0.4167, 0.2222, 0.0000, 0.5000, 0.2222, 0.0000, 0.5833,
    0.2222, 0.0000, 0.6667, 0.2222, 0.0000, 0.7500, 0.2222, 0.0000, 0.8333, 0.2222, 0.0000,
    0.9167, 0.2222, 0.0000, 0.0000, 0.2593, 0.0000, 0.0833, 0.2593, 0.0000, 0.1667, 0.2593,
    0.0000, 0.2500, 0.2593, 0.0000, 0.3333, 0.2593, 0.0000, 0.4167, 0.2593, 0.0000, 0.5000,
    0.2593, 0.0000, 0.5833, 0.2593, 0.0000, 0.6667, 0.2593, 0.0000, 0.7500, 0.2593, 0.0000,
    0.8333, 0.2593, 0.0000, 0.9167, 0.2593, 0.0000, 0.0000, 0.2963, 0.0000, 0.0833, 0.2963,
    0.0000, 0.1667, 0.2963, 0.0000, 0.2500, 0.2963, 0.0000, 0.3333, 0.2963, 0.0000, 0.4167,
    0.2963, 0.0000, 0.5000, 0.2963, 0.0000, 0.5833, 0.2963, 0.0000, 0.6667, 0.2963, 0.0000,
    0.7500, 0.2963, 0.0000, 0.8333, 0.2963, 0.0000, 0.9167, 0.2963, 0.0000, 0.0000, 0.3333,
    0.0000, 0.0833, 0.3333, 0.0000, 0.1667, 0.3333, 0.0000, 0.2500, 0.3333, 0.0000, 0.3333,
    0.3333, 0.0000, 0.4167, 0.3333, 0.0000, 0.5000, 0.3333, 0.0000, 0.5833, 0.3333, 0.0000,
    0.6667, 0.3333, 0.0000, 0.7500, 0.3333, 0.0000, 0.8333, 0.3333, 0.0000, 0.9167, 0.3333,
    0.0000, 0.0000, 0.3704, 0.0000, 0.0833, 0.3704, 0.0000, 0.1667, 0.3704, 0.0000, 0.2500,
    0.3704, 0.0000, 0.3333, 0.3704, 0.0000, 0.4167, 0.3704, 0.0000, 0.5000, 0.3704, 0.0000,
    0.5833, 0.3704, 0.0000, 0.6667, 0.3704, 0.0000, 0.7500, 0.3704, 0.0000, 0.8333, 0.3704,
    0.0000, 0.9167, 0.3704, 0.0000, 0.0000, 0.4074, 0.0000, 0.0833, 0.4074, 0.0000, 0.1667,
    0.4074, 0.0000, 0.2500, 0.4074, 0.0000, 0.3333, 0.4074, 0.0000, 0.4167, 0.4074, 0.0000,
    0.5000, 0.4074, 0.0000, 0.5833, 0.4074, 0.0000, 0.6667, 0.4074, 0.0000, 0.7500, 0.4074,
    0.0000, 0.8333, 0.4074, 0.0000, 0.9167, 0.4074, 0.0000, 0.0000, 0.4444, 0.0000, 0.0833,
    0.4444, 0.0000, 0.1667, 0.4444, 0.0000, 0.2500, 0.4444, 0.0000, 0.3333, 0.4444, 0.0000,
    0.4167, 0.4444, 0.0000, 0.5000, 0.4444, 0.0000, 0.5833, 0.4444, 0.0000, 0.6667, 0.4444,
    0.0000, 0.7500, 0.4444, 0.0000, 0.8333, 0.4444, 0.0000, 0.9167, 0.4444, 0.0000, 0.0000,
    0.4815, 0.0000, 0.0833, 0.4815, 0.0000, 0.1667, 0.4815, 0.0000, 0.2500, 0.4815, 0.0000,
    0.3333, 0.4815, 0.0000, 0.4167, 0.4815, 0.0000, 0.5000, 0.4815, 0.0000, 0.5833, 0.4815,
    0.0000, 0.6667, 0.4815, 0.0000, 0.7500, 0.4815, 0.0000, 0.8333, 0.4815, 0.0000, 0.9167,
    0.4815, 0.0000, 0.0000, 0.5185, 0.0000, 0.0833, 0.5185, 0.0000, 0.1667, 0.5185, 0.0000,
    0.2500, 0.5185, 0.0000, 0.3333, 0.5185, 0.0000, 0.4167, 0.5185, 0.0000, 0.5000, 0.5185,
    0.0000, 0.5833, 0.5185, 0.0000, 0.6667, 0.5185, 0.0000, 0.7500, 0.5185, 0.0000, 0.8333,
    0.5185, 0.0000, 0.9167, 0.5185, 0.0000, 0.0000, 0.5556, 0.0000, 0.0833, 0.5556, 0.0000,
    0.1667, 0.5556, 0.0000, 0.2500, 0.5556, 0.0000, 0.3333, 0.5556, 0.0000, 0.4167, 0.5556,
    0.0000, 0.5000, 0.5556, 0.0000, 0.5833, 0.5556, 0.0000, 0.6667, 0.5556, 0.0000, 0.7500,
    0.5556, 0.0000, 0.8333, 0.5556, 0.0000, 0.9167, 0.5556, 0.0000, 0.0000, 0.5926, 0.0000,
    0.0833, 0.5926, 0.0000, 0.1667, 0.5926, 0.0000, 0.2500, 0.5926, 0.0000, 0.3333, 0.5926,
    0.0000, 0.4167, 0.5926, 0.0000, 0.5000, 0.5926, 0.0000, 0.5833, 0.5926, 0.0000, 0.6667,
    0.5926, 0.0000, 0.7500, 0.5926, 0.0000, 0.8333, 0.5926, 0.0000, 0.9167, 0.5926, 0.0000,
    0.0000, 0.6296, 0.0000, 0.0833, 0.6296, 0.0000, 0.1667, 0.6296, 0.0000, 0.2500, 0.6296,
    0.0000, 0.3333, 0.6296, 0.0000, 0.4167, 0.6296, 0.0000, 0.5000, 0.6296, 0.0000, 0.5833,
    0.6296, 0.0000, 0.6667, 0.6296, 0.0000, 0.7500, 0.6296, 0.0000, 0.8333, 0.6296, 0.0000,
    0.9167, 0.6296, 0.0000, 0.0000, 0.6667, 0.0000, 0.0833, 0.6667, 0.0000, 0.1667, 0.6667,
    0.0000, 0.2500, 0.6667, 0.0000, 0.3333, 0.6667, 0.0000, 0.4167, 0.6667, 0.0000, 0.5000,
    0.6667, 0.0000, 0.5833, 0.6667, 0.0000, 0.6667, 0.6667, 0.0000, 0.7500, 0.6667, 0.0000,
    0.8333, 0.6667, 0.0000, 0.9167, 0.6667, 0.0000, 0.0000, 0.7037, 0.0000, 0.0833, 0.7037,
    0.0000, 0.1667, 0.7037, 0.0000, 0.2500, 0.7037, 0.0000, 0.3333, 0.7037, 0.0000, 0.4167,
    0.7037, 0.0000, 0.5000, 0.7037, 0.0000, 0.5833, 0.7037, 0.0000, 0.6667, 0.7037, 0.0000,
    0.7500, 0.7037, 0.0000, 0.8333, 0.7037, 0.0000, 0.9167, 0.7037, 0.0000, 0.0000, 0.7407,
    0.0000, 0.0833, 0.7407, 0.0000, 0.1667, 0.7407, 0.0000, 0.2500, 0.7407, 0.0000, 0.3333,
    0.7407, 0.0000, 0.4167, 0.7407, 0.0000, 0.5000, 0.7407, 0.0000, 0.5833, 0.7407, 0.0000,
    0.6667, 0.7407, 0.0000, 0.7500, 0.7407, 0.0000, 0.8333, 0.7407, 0.0000, 0.9167, 0.7407,
    0.0000, 0.0000, 0.7778, 0.0000, 0.0833, 0.7778, 0.0000, 0.1667, 0.7778, 0.0000, 0.2500,
    0.7778, 0.0000, 0.3333, 0.7778, 0.0000, 0.4167, 0.7778, 0.0000, 0.5000, 0.7778, 0.0000,
    0.5833, 0.7778, 0.0000, 0.6667, 0.7778, 0.0000, 0.7500, 0.7778, 0.0000, 0.8333, 0.7778,
    0.0000, 0.9167, 0.7778, 0.0000, 0.0000, 0.8148, 0.0000, 0.0833, 0.8148, 0.0000, 0.1667,
    0.8148, 0.0000, 0.2500, 0.8148, 0.0000, 0.3333, 0.8148, 0.0000, 0.4167, 0.8148, 0.0000,
    0.5000, 0.8148, 0.0000, 0.5833, 0.8148, 0.0000, 0.6667, 0.8148, 0.0000, 0.7500, 0.8148,
    0.0000, 0.8333, 0.8148, 0.0000, 0.9167, 0.8148, 0.0000, 0.0000, 0.8519, 0.0000, 0.0833,
    0.8519, 0.0000, 0.1667, 0.8519, 0.0000, 0.2500, 0.8519, 0.0000, 0.3333, 0.8519, 0.0000,
    0.4167, 0.8519, 0.0000, 0.5000, 0.8519, 0.0000, 0.5833, 0.8519, 0.0000, 0.6667, 0.8519,
    0.0000, 0.7500, 0.8519, 0.0000, 0.8333, 0.8519, 0.0000, 0.9167, 0.8519, 0.0000, 0.0000,
    0.8889, 0.0000, 0.0833, 0.8889, 0.0000, 0.1667, 0.8889, 0.0000, 0.2500, 0.8889, 0.0000,
    0.3333, 0.8889, 0.0000, 0.4167, 0.8889, 0.0000, 0.5000, 0.8889, 0.0000, 0.5833, 0.8889,
    0.0000, 0.6667, 0.8889, 0.0000, 0.7500, 0.8889, 0.0000, 0.8333, 0.8889, 0.0000, 0.9167,
    0.8889, 0.0000, 0.0000, 0.9259, 0.0000, 0.0833, 0.9259, 0.0000, 0.1667, 0.9259, 0.0000,
    0.2500, 0.9259, 0.0000, 0.3333, 0.9259, 0.0000, 0.4167, 0.9259, 0.0000, 0.5000, 0.9259,
    0.0000, 0.5833, 0.9259, 0.0000, 0.6667, 0.9259, 0.0000, 0.7500, 0.9259, 0.0000, 0.8333,
    0.9259, 0.0000, 0.9167, 0.9259, 0.0000, 0.0000, 0.9630, 0.0000, 0.0833, 0.9630, 0.0000,
    0.1667, 0.9630, 0.0000, 0.2500, 0.9630, 0.0000, 0.3333, 0.9630, 0.0000, 0.4167, 0.9630,
    0.0000, 0.5000, 0.9630, 0.0000, 0.5833, 0.9630, 0.0000, 0.6667, 0.9630, 0.0000, 0.7500,
    0.9630, 0.0000, 0.8333, 0.9630, 0.0000, 0.9167, 0.9630, 0.0000, 0.0000, 1.0000, 0.0000,
    0.0833, 1.0000, 0.0000, 0.1667, 1.0000, 0.0000, 0.2500, 1.0000, 0.0000, 0.3333, 1.0000,
    0.0000, 0.4167, 1.0000, 0.0000, 0.5000, 1.0000, 0.0000, 0.5833, 1.0000, 0.0000, 0.6667,
    1.0000, 0.0000, 0.7500, 1.0000, 0.0000, 0.8333, 1.0000, 0.0000, 0.9167, 1.0000, 0.0000,
    0.0000, 0.0000, 0.0000, 0.0833, 0.0000, 0.0000, 0.1667, 0.0000, 0.0000, 0.2500, 0.0000,
    0.0000, 0.3333, 0.0000, 0.0000, 0.4167, 0.0000, 0.0000, 0.5000, 0.0000, 0.0000, 0.5833,
    0.0000, 0.0000, 0.6667, 0.0000, 0.0000, 0.7500, 0.0000, 0.0000, 0.8333, 0.0000, 0.0000,
    0.9167, 0.0000, 0.0000, 0.0000, 0.1111, 0.0000, 0.0833, 0.1111, 0.0000, 0.1667, 0.1111,
    0.0000, 0.2500, 0.1111, 0.0000, 0.3333, 0.1111, 0.0000, 0.4167, 0.1111, 0.0000, 0.5000,
    0.1111, 0.0000, 0.5833, 0.1111, 0.0000, 0.6667, 0.1111, 0.0000, 0.7500, 0.1111, 0.0000,
    0.8333, 0.1111, 0.0000, 0.9167, 0.1111, 0.0000, 0.0000, 0.2222, 0.0000, 0.0833, 0.2222,
    0.0000, 0.1667, 0.2222, 0.0000, 0.2500, 0.2222, 0.0000, 0.3333, 0.2222, 0.0000, 0.4167,
    0.2222, 0.0000, 0.5000, 0.2222, 0.0000, 0.5833, 0.2222, 0.0000, 0.6667, 0.2222, 0.0000,
    0.7500, 0.2222, 0.0000, 0.8333, 0.2222, 0.0000, 0.9167, 0.2222, 0.0000, 0.0000, 0.3333,
    0.0000, 0.0833, 0.3333, 0.0000, 0.1667, 0.3333, 0.0000, 0.2500, 0.3333, 0.0000, 0.3333,
    0.3333, 0.0000, 0.4167, 0.3333, 0.0000, 0.5000, 0.3333, 0.0000, 0.5833, 0.3333, 0.0000,
    0.6667, 0.3333, 0.0000, 0.7500, 0.3333, 0.0000, 0.8333, 0.3333, 0.0000, 0.9167, 0.3333,
    0.0000, 0.0000, 0.4444, 0.0000, 0.0833, 0.4444, 0.0000, 0.1667, 0.4444, 0.0000, 0.2500,
    0.4444, 0.0000, 0.3333, 0.4444, 0.0000, 0.4167, 0.4444, 0.0000, 0.5000, 0.4444, 0.0000,
    0.5833, 0.4444, 0.0000, 0.6667, 0.4444, 0.0000, 0.7500, 0.4444, 0.0000, 0.8333, 0.4444,
    0.0000, 0.9167, 0.4444, 0.0000, 0.0000, 0.5556, 0.0000, 0.0833, 0.5556, 0.0000, 0.1667,
    0.5556, 0.0000, 0.2500, 0.5556, 0.0000, 0.3333, 0.5556, 0.0000, 0.4167, 0.5556, 0.0000,
    0.5000, 0.5556, 0.0000, 0.5833, 0.5556, 0.0000, 0.6667, 0.5556, 0.0000, 0.7500, 0.5556,
    0.0000, 0.8333, 0.5556, 0.0000, 0.9167, 0.5556, 0.0000, 0.0000, 0.6667, 0.0000, 0.0833,
    0.6667, 0.0000, 0.1667, 0.6667, 0.0000, 0.2500, 0.6667, 0.0000, 0.3333, 0.6667, 0.0000,
    0.4167, 0.6667, 0.0000, 0.5000, 0.6667, 0.0000, 0.5833, 0.6667, 0.0000, 0.6667, 0.6667,
    0.0000, 0.7500, 0.6667, 0.0000, 0.8333, 0.6667, 0.0000, 0.9167, 0.6667, 0.0000, 0.0000,
    0.7778, 0.0000, 0.0833, 0.7778, 0.0000, 0.1667, 0.7778, 0.0000, 0.2500, 0.7778, 0.0000,
    0.3333, 0.7778, 0.0000, 0.4167, 0.7778, 0.0000, 0.5000, 0.7778, 0.0000, 0.5833, 0.7778,
    0.0000, 0.6667, 0.7778, 0.0000, 0.7500, 0.7778, 0.0000, 0.8333, 0.7778, 0.0000, 0.9167,
    0.7778, 0.0000, 0.0000, 0.8889, 0.0000, 0.0833, 0.8889, 0.0000, 0.1667, 0.8889, 0.0000,
    0.2500, 0.8889, 0.0000, 0.3333, 0.8889, 0.0000, 0.4167, 0.8889, 0.0000, 0.5000, 0.8889,
    0.0000, 0.5833, 0.8889, 0.0000, 0.6667, 0.8889, 0.0000, 0.7500, 0.8889, 0.0000, 0.8333,
    0.8889, 0.0000, 0.9167, 0.8889, 0.0000, 0.0000, 1.0000, 0.0000, 0.0833, 1.0000, 0.0000,
    0.1667, 1.0000, 0.0000, 0.2500, 1.0000, 0.0000, 0.3333, 1.0000, 0.0000, 0.4167, 1.0000,
    0.0000, 0.5000, 1.0000, 0.0000, 0.5833, 1.0000, 0.0000, 0.6667, 1.0000, 0.0000, 0.7500,
    1.0000, 0.0000, 0.8333, 1.0000, 0.0000, 0.9167, 1.0000, 0.0000,
];

pub static TEAPOT_INDICES: [u16; 6696] = [
    0, 36, 37, 0, 37, 1, 1, 37, 38, 1, 38, 2, 2, 38, 39, 2, 39, 3, 3, 39, 40, 3, 40, 4, 4, 40, 41,
    4, 41, 5, 5, 41, 42, 5, 42, 6, 6, 42, 43, 6, 43, 7, 7, 43, 44, 7, 44, 8, 8, 44, 45, 8, 45, 9,
    9, 45, 46, 9, 46, 10, 10, 46, 47, 10, 47, 11, 11, 47, 48, 11, 48, 12, 12, 48, 49, 12, 49, 13,
    13, 49, 50, 13, 50, 14, 14, 50, 51, 14, 51, 15, 15, 51, 52, 15, 52, 16, 16, 52, 53, 16, 53,
    17, 17, 53, 54, 17, 54, 18, 18, 54, 55, 18, 55, 19, 19, 55, 56, 19, 56, 20, 20, 56, 57, 20,
    57, 21, 21, 57, 58, 21, 58, 22, 22, 58, 59, 22, 59, 23, 23, 59, 60, 23, 60, 24, 24, 60, 61,
    24, 61, 25, 25, 61, 62, 25, 62, 26, 26, 62, 63, 26, 63, 27, 27, 63, 64, 27, 64, 28, 28, 64,
    65, 28, 65, 29, 29, 65, 66, 29, 66, 30, 30, 66, 67, 30, 67, 31, 31, 67, 68, 31, 68, 32, 32,
    68, 69, 32, 69, 33, 33, 69, 70, 33, 70, 34, 34, 70, 71, 34, 71, 35, 35, 71, 36, 35, 36, 0, 36,
    72, 73, 36, 73, 37, 37, 73, 74, 37, 74, 38, 38, 74, 75, 38, 75, 39, 39, 75, 76, 39, 76, 40,
    40, 76, 77, 40, 77, 41, 41, 77, 78, 41, 78, 42, 42, 78, 79, 42, 79, 43, 43, 79, 80, 43, 80,
    44, 44, 80, 81, 44, 81, 45, 45, 81, 82, 45, 82, 46, 46, 82, 83, 46, 83, 47, 47, 83, 84, 47,
    84, 48, 48, 84, 85, 48, 85, 49, 49, 85, 86, 49, 86, 50, 50, 86, 87, 50, 87, 51, 51, 87, 88,
    51, 88, 52, 52, 88, 89, 52, 89, 53, 53, 89, 90, 53, 90, 54, 54, 90, 91, 54, 91, 55, 55, 91,
    92, 55, 92, 56, 56, 92, 93, 56, 93, 57, 57, 93, 94, 57, 94, 58, 58, 94, 95, 58, 95, 59, 59,
    95, 96, 59, 96, 60, 60, 96, 97, 60, 97, 61, 61, 97, 98, 61, 98, 62, 62, 98, 99, 62, 99, 63,
    63, 99, 100, 63, 100, 64, 64, 100, 101, 64, 101, 65, 65, 101, 102, 65, 102, 66, 66, 102, 103,
    66, 103, 67, 67, 103, 104, 67, 104, 68, 68, 104, 105, 68, 105, 69, 69, 105, 106, 69, 106, 70,
    70, 106, 107, 70, 107, 71, 71, 107, 72, 71, 72, 36, 72, 108, 109, 72, 109, 73, 73, 109, 110,
    73, 110, 74, 74, 110, 111, 74, 111, 75, 75, 111, 112, 75, 112, 76, 76, 112, 113, 76, 113, 77,
    77, 113, 114, 77, 114, 78, 78, 114, 115, 78, 115, 79, 79, 115, 116, 79, 116, 80, 80, 116, 117,
    80, 117, 81, 81, 117, 118, 81, 118, 82, 82, 118, 119, 82, 119, 83, 83, 119, 120, 83, 120, 84,
    84, 120, 121, 84, 121, 85, 85, 121, 122, 85, 122, 86, 86, 122, 123, 86, 123, 87, 87, 123, 124,
    87, 124, 88, 88, 124, 125, 88, 125, 89, 89, 125, 126, 89, 126, 90, 90, 126, 127, 90, 127, 91,
    91, 127, 128, 91, 128, 92, 92, 128, 129, 92, 129, 93, 93, 129, 130, 93, 130, 94, 94, 130, 131,
    94, 131, 95, 95, 131, 132, 95, 132, 96, 96, 132, 133, 96, 133, 97, 97, 133, 134, 97, 134, 98,
    98, 134, 135, 98, 135, 99, 99, 135, 136, 99, 136, 100, 100, 136, 137, 100, 137, 101, 101, 137,
    138, 101, 138, 102, 102, 138, 139, 102, 139, 103, 103, 139, 140, 103, 140, 104, 104, 140, 141,
    104, 141, 105, 105, 141, 142, 105, 142, 106, 106, 142, 143, 106, 143, 107, 107, 143, 108, 107,
    108, 72, 108, 144, 145, 108, 145, 109, 109, 145, 146, 109, 146, 110, 110, 146, 147, 110, 147,
    111, 111, 147, 148, 111, 148, 112, 112, 148, 149, 112, 149, 113, 113, 149, 150, 113, 150, 114,
    114, 150, 151, 114, 151, 115, 115, 151, 152, 115, 152, 116, 116, 152, 153, 116, 153, 117, 117,
    153, 154, 117, 154, 118, 118, 154, 155, 118, 155, 119, 119, 155, 156, 119, 156, 120, 120, 156,
    157, 120, 157, 121, 121, 157, 158, 121, 158, 122, 122, 158, 159, 122, 159, 123, 123, 159, 160,
    123, 160, 124, 124, 160, 161, 124, 161, 125, 125, 161, 162, 125, 162, 126, 126, 162, 163, 126,
    163, 127, 127, 163, 164, 127, 164, 128, 128, 164, 165, 128, 165, 129, 129, 165, 166, 129, 166,
    130, 130, 166, 167, 130, 167, 131, 131, 167, 168, 131, 168, 132, 132, 168, 169, 132, 169, 133,
    133, 169, 170, 133, 170, 134, 134, 170, 171, 134, 171, 135, 135, 171, 172, 135, 172, 136, 136,
    172, 173, 136, 173, 137, 137, 173, 174, 137, 174, 138, 138, 174, 175, 138, 175, 139, 139, 175,
    176, 139, 176, 140, 140, 176, 177, 140, 177, 141, 141, 177, 178, 141, 178, 142, 142, 178, 179,
    142, 179, 143, 143, 179, 144, 143, 144, 108, 144, 180, 181, 144, 181, 145, 145, 181, 182, 145,
    182, 146, 146, 182, 183, 146, 183, 147, 147, 183, 184, 147, 184, 148, 148, 184, 185, 148, 185,
    149, 149, 185, 186, 149, 186, 150, 150, 186, 187, 150, 187, 151, 151, 187, 188, 151, 188, 152,
    152, 188, 189, 152, 189, 153, 153, 189, 190, 153, 190, 154, 154, 190, 191, 154, 191, 155, 155,
    191, 192, 155, 192, 156, 156, 192, 193, 156, 193, 157, 157, 193, 194, 157, 194, 158, 158, 194,
    195, 158, 195, 159, 159, 195, 196, 159, 196, 160, 160, 196, 197, 160, 197, 161, 161, 197, 198,
    161, 198, 162, 162, 198, 199, 162, 199, 163, 163, 199, 200, 163, 200, 164, 164, 200, 201, 164,
    201, 165, 165, 201, 202, 165, 202, 166, 166, 202, 203, 166, 203, 167, 167, 203, 204, 167, 204,
    168, 168, 204, 205, 168, 205, 169, 169, 205, 206, 169, 206, 170, 170, 206, 207, 170, 207, 171,
    171, 207, 208, 171, 208, 172, 172, 208, 209, 172, 209, 173, 173, 209, 210, 173, 210, 174, 174,
    210, 211, 174, 211, 175, 175, 211, 212, 175, 212, 176, 176, 212, 213, 176, 213, 177, 177, 213,
    214, 177, 214, 178, 178, 214, 215, 178, 215, 179, 179, 215, 180, 179, 180, 144, 180, 216, 217,
    180, 217, 181, 181, 217, 218, 181, 218, 182, 182, 218, 219, 182, 219, 183, 183, 219, 220, 183,
    220, 184, 184, 220, 221, 184, 221, 185, 185, 221, 222, 185, 222, 186, 186, 222, 223, 186, 223,
    187, 187, 223, 224, 187, 224, 188, 188, 224, 225, 188, 225, 189, 189, 225, 226, 189, 226, 190,
    190, 226, 227, 190, 227, 191, 191, 227, 228, 191, 228, 192, 192, 228, 229, 192, 229, 193, 193,
    229, 230, 193, 230, 194, 194, 230, 231, 194, 231, 195, 195, 231, 232, 195, 232, 196, 196, 232,
    233, 196, 233, 197, 197, 233, 234, 197, 234, 198, 198, 234, 235, 198, 235, 199, 199, 235, 236,
    199, 236, 200, 200, 236, 237, 200, 237, 201, 201, 237, 238, 201, 238, 202, 202, 238, 239, 202,
    239, 203, 203, 239, 240, 203, 240, 204, 204, 240, 241, 204, 241, 205, 205, 241, 242, 205, 242,
    206, 206, 242, 243, 206, 243, 207, 207, 243, 244, 207, 244, 208, 208, 244, 245, 208, 245, 209,
    209, 245, 246, 209, 246, 210, 210, 246, 247, 210, 247, 211, 211, 247, 248, 211, 248, 212, 212,
    248, 249, 212, 249, 213, 213, 249, 250, 213, 250, 214, 214, 250, 251, 214, 251, 215, 215, 251,
    216, 215, 216, 180, 216, 252, 253, 216, 253, 217, 217, 253, 254, 217, 254, 218, 218, 254, 255,
    218, 255, 219, 219, 255, 256, 219, 256, 220, 220, 256, 257, 220, 257, 221, 221, 257, 258, 221,
    258, 222, 222, 258, 259, 222, 259, 223, 223, 259, 260, 223, 260, 224, 224, 260, 261, 224, 261,
    225, 225, 261, 262, 225, 262, 226, 226, 262, 263, 226, 263, 227, 227, 263, 264, 227, 264, 228,
    228, 264, 265, 228, 265, 229, 229, 265, 266, 229, 266, 230, 230, 266, 267, 230, 267, 231, 231,
    267, 268, 231, 268, 232, 232, 268, 269, 232, 269, 233, 233, 269, 270, 233, 270, 234, 234, 270,
    271, 234, 271, 235, 235, 271, 272, 235, 272, 236, 236, 272, 273, 236, 273, 237, 237, 273, 274,
    237, 274, 238, 238, 274, 275, 238, 275, 239, 239, 275, 276, 239, 276, 240, 240, 276, 277, 240,
    277, 241, 241, 277, 278, 241, 278, 242, 242, 278, 279, 242, 279, 243, 243, 279, 280, 243, 280,
    244, 244, 280, 281, 244, 281, 245, 245, 281, 282, 245, 282, 246, 246, 282, 283, 246, 283, 247,
    247, 283, 284, 247, 284, 248, 248, 284, 285, 248, 285, 249, 249, 285, 286, 249, 286, 250, 250,
    286, 287, 250, 287, 251, 251, 287, 252, 251, 252, 216, 252, 288, 289, 252, 289, 253, 253, 289,
    290, 253, 290, 254, 254, 290, 291, 254, 291, 255, 255, 291, 292, 255, 292, 256, 256, 292, 293,
    256, 293, 257, 257, 293, 294, 257, 294, 258, 258, 294, 295, 258, 295, 259, 259, 295, 296, 259,
    296, 260, 260, 296, 297, 260, 297, 261, 261, 297, 298, 261, 298, 262, 262, 298, 299, 262, 299,
    263, 263, 299, 300, 263, 300, 264, 264, 300, 301, 264, 301, 265, 265, 301, 302, 265, 302, 266,
    266, 302, 303, 266, 303, 267, 267, 303, 304, 267, 304, 268, 268, 304, 305, 268, 305, 269, 269,
    305, 306, 269, 306, 270, 270, 306, 307, 270, 307, 271, 271, 307, 308, 271, 308, 272, 272, 308,
    309, 272, 309, 273, 273, 309, 310, 273, 310, 274, 274, 310, 311, 274, 311, 275, 275, 311, 312,
    275, 312, 276, 276, 312, 313, 276, 313, 277, 277, 313, 314, 277, 314, 278, 278, 314, 315, 278,
    315, 279, 279, 315, 316, 279, 316, 280, 280, 316, 317, 280, 317, 281, 281, 317, 318, 281, 318,
    282, 282, 318, 319, 282, 319, 283, 283, 319, 320, 283, 320, 284, 284, 320, 321, 284, 321, 285,
    285, 321, 322, 285, 322, 286, 286, 322, 323, 286, 323, 287, 287, 323, 288, 287, 288, 252, 288,
    324, 325, 288, 325, 289, 289, 325, 326, 289, 326, 290, 290, 326, 327, 290, 327, 291, 291, 327,
    328, 291, 328, 292, 292, 328, 329, 292, 329, 293, 293, 329, 330, 293, 330, 294, 294, 330, 331,
    294, 331, 295, 295, 331, 332, 295, 332, 296, 296, 332, 333, 296, 333, 297, 297, 333, 334, 297,
    334, 298, 298, 334, 335, 298, 335, 299, 299, 335, 336, 299, 336, 300, 300, 336, 337, 300, 337,
    301, 301, 337, 338, 301, 338, 302, 302, 338, 339, 302, 339, 303, 303, 339, 340, 303, 340, 304,
    304, 340, 341, 304, 341, 305, 305, 341, 342, 305, 342, 306, 306, 342, 343, 306, 343, 307, 307,
    343, 344, 307, 344, 308, 308, 344, 345, 308, 345, 309, 309, 345, 346, 309, 346, 310, 310, 346,
    347, 310, 347, 311, 311, 347, 348, 311, 348, 312, 312, 348, 349, 312, 349, 313, 313, 349, 350,
    313, 350, 314, 314, 350, 351, 314, 351, 315, 315, 351, 352, 315, 352, 316, 316, 352, 353, 316,
    353, 317, 317, 353, 354, 317, 354, 318, 318, 354, 355, 318, 355, 319, 319, 355, 356, 319, 356,
    320, 320, 356, 357, 320, 357, 321, 321, 357, 358, 321, 358, 322, 322, 358, 359, 322, 359, 323,
    323, 359, 324, 323, 324, 288, 324, 360, 361, 324, 361, 325, 325, 361, 362, 325, 362, 326, 326,
    362, 363, 326, 363, 327, 327, 363, 364, 327, 364, 328, 328, 364, 365, 328, 365, 329, 329, 365,
    366, 329, 366, 330, 330, 366, 367, 330, 367, 331, 331, 367, 368, 331, 368, 332, 332, 368, 369,
    332, 369, 333, 333, 369, 370, 333, 370, 334, 334, 370, 371, 334, 371, 335, 335, 371, 372, 335,
    372, 336, 336, 372, 373, 336, 373, 337, 337, 373, 374, 337, 374, 338, 338, 374, 375, 338, 375,
    339, 339, 375, 376, 339, 376, 340, 340, 376, 377, 340, 377, 341, 341, 377, 378, 341, 378, 342,
    342, 378, 379, 342, 379, 343, 343, 379, 380, 343, 380, 344, 344, 380, 381, 344, 381, 345, 345,
    381, 382, 345, 382, 346, 346, 382, 383, 346, 383, 347, 347, 383, 384, 347, 384, 348, 348, 384,
    385, 348, 385, 349, 349, 385, 386, 349, 386, 350, 350, 386, 387, 350, 387, 351, 351, 387, 388,
    351, 388, 352, 352, 388, 389, 352, 389, 353, 353, 389, 390, 353, 390, 354, 354, 390, 391, 354,
    391, 355, 355, 391, 392, 355, 392, 356, 356, 392, 393, 356, 393, 357, 357, 393, 394, 357, 394,
    358, 358, 394, 395, 358, 395, 359, 359, 395, 360, 359, 360, 324, 360, 396, 397, 360, 397, 361,
    361, 397, 398, 361, 398, 362, 362, 398, 399, 362, 399, 363, 363, 399, 400, 363, 400, 364, 364,
    400, 401, 364, 401, 365, 365, 401, 402, 365, 402, 366, 366, 402, 403, 366, 403, 367, 367, 403,
    404, 367, 404, 368, 368, 404, 405, 368, 405, 369, 369, 405, 406, 369, 406, 370, 370, 406, 407,
    370, 407, 371, 371, 407, 408, 371, 408, 372, 372, 408, 409, 372, 409, 373, 373, 409, 410, 373,
    410, 374, 374, 410, 411, 374, 411, 375, 375, 411, 412, 375, 412, 376, 376, 412, 413, 376, 413,
    377, 377, 413, 414, 377, 414, 378, 378, 414, 415, 378, 415, 379, 379, 415, 416, 379, 416, 380,
    380, 416, 417, 380, 417, 381, 381, 417, 418, 381, 418, 382, 382, 418, 419, 382, 419, 383, 383,
    419, 420, 383, 420, 384, 384, 420, 421, 384, 421, 385, 385, 421, 422, 385, 422, 386, 386, 422,
    423, 386, 423, 387, 387, 423, 424, 387, 424, 388, 388, 424, 425, 388, 425, 389, 389, 425, 426,
    389, 426, 390, 390, 426, 427, 390, 427, 391, 391, 427, 428, 391, 428, 392, 392, 428, 429, 392,
    429, 393, 393, 429, 430, 393, 430, 394, 394, 430, 431, 394, 431, 395, 395, 431, 396, 395, 396,
    360, 396, 432, 433, 396, 433, 397, 397, 433, 434, 397, 434, 398, 398, 434, 435, 398, 435, 399,
    399, 435, 436, 399, 436, 400, 400, 436, 437, 400, 437, 401, 401, 437, 438, 401, 438, 402, 402,
    438, 439, 402, 439, 403, 403, 439, 440, 403, 440, 404, 404, 440, 441, 404, 441, 405, 405, 441,
    442, 405, 442, 406, 406, 442, 443, 406, 443, 407, 407, 443, 444, 407, 444, 408, 408, 444, 445,
    408, 445, 409, 409, 445, 446, 409, 446, 410, 410, 446, 447, 410, 447, 411, 411, 447, 448, 411,
    448, 412, 412, 448, 449, 412, 449, 413, 413, 449, 450, 413, 450, 414, 414, 450, 451, 414, 451,
    415, 415, 451, 452, 415, 452, 416, 416, 452, 453, 416, 453, 417, 417, 453, 454, 417, 454, 418,
    418, 454, 455, 418, 455, 419, 419, 455, 456, 419, 456, 420, 420, 456, 457, 420, 457, 421, 421,
    457, 458, 421, 458, 422, 422, 458, 459, 422, 459, 423, 423, 459, 460, 423, 460, 424, 424, 460,
    461, 424, 461, 425, 425, 461, 462, 425, 462, 426, 426, 462, 463, 426, 463, 427, 427, 463, 464,
    427, 464, 428, 428, 464, 465, 428, 465, 429, 429, 465, 466, 429, 466, 430, 430, 466, 467, 430,
    467, 431, 431, 467, 432, 431, 432, 396, 432, 468, 469, 432, 469, 433, 433, 469, 470, 433, 470,
    434, 434, 470, 471, 434, 471, 435, 435, 471, 472, 435, 472, 436, 436, 472, 473, 436, 473, 437,
    437, 473, 474, 437, 474, 438, 438, 474, 475, 438, 475, 439, 439, 475, 476, 439, 476, 440, 440,
    476, 477, 440, 477, 441, 441, 477, 478, 441, 478, 442, 442, 478, 479, 442, 479, 443, 443, 479,
    480, 443, 480, 444, 444, 480, 481, 444, 481, 445, 445, 481, 482, 445, 482, 446, 446, 482, 483,
    446, 483, 447, 447, 483, 484, 447, 484, 448, 448, 484, 485, 448, 485, 449, 449, 485, 486, 449,
    486, 450, 450, 486, 487, 450, 487, 451, 451, 487, 488, 451, 488, 452, 452, 488, 489, 452, 489,
    453, 453, 489, 490, 453, 490, 454, 454, 490, 491, 454, 491, 455, 455, 491, 492, 455, 492, 456,
    456, 492, 493, 456, 493, 457, 457, 493, 494, 457, 494, 458, 458, 494, 495, 458, 495, 459, 459,
    495, 496, 459, 496, 460, 460, 496, 497, 460, 497, 461, 461, 497, 498, 461, 498, 462, 462, 498,
    499, 462, 499, 463, 463, 499, 500, 463, 500, 464, 464, 500, 501, 464, 501, 465, 465, 501, 502,
    465, 502, 466, 466, 502, 503, 466, 503, 467, 467, 503, 468, 467, 468, 432, 468, 504, 505, 468,
    505, 469, 469, 505, 506, 469, 506, 470, 470, 506, 507, 470, 507, 471, 471, 507, 508, 471, 508,
    472, 472, 508, 509, 472, 509, 473, 473, 509, 510, 473, 510, 474, 474, 510, 511, 474, 511, 475,
    475, 511, 512, 475, 512, 476, 476, 512, 513, 476, 513, 477, 477, 513, 514, 477, 514, 478, 478,
    514, 515, 478, 515, 479, 479, 515, 516, 479, 516, 480, 480, 516, 517, 480, 517, 481, 481, 517,
    518, 481, 518, 482, 482, 518, 519, 482, 519, 483, 483, 519, 520, 483, 520, 484, 484, 520, 521,
    484, 521, 485, 485, 521, 522, 485, 522, 486, 486, 522, 523, 486, 523, 487, 487, 523, 524, 487,
    524, 488, 488, 524, 525, 488, 525, 489, 489, 525, 526, 489, 526, 490, 490, 526, 527, 490, 527,
    491, 491, 527, 528, 491, 528, 492, 492, 528, 529, 492, 529, 493, 493, 529, 530, 493, 530, 494,
    494, 530, 531, 494, 531, 495, 495, 531, 532, 495, 532, 496, 496, 532, 533, 496, 533, 497, 497,
    533, 534, 497, 534, 498, 498, 534, 535, 498, 535, 499, 499, 535, 536, 499, 536, 500, 500, 536,
    537, 500, 537, 501, 501, 537, 538, 501, 538, 502, 502, 538, 539, 502, 539, 503, 503, 539, 504,
    503, 504, 468, 504, 540, 541, 504, 541, 505, 505, 541, 542, 505, 542, 506, 506, 542, 543, 506,
    543, 507, 507, 543, 544, 507, 544, 508, 508, 544, 545, 508, 545, 509, 509, 545, 546, 509, 546,
    510, 510, 546, 547, 510, 547, 511, 511, 547, 548, 511, 548, 512, 512, 548, 549, 512, 549, 513,
    513, 549, 550, 513, 550, 514, 514, 550, 551, 514, 551, 515, 515, 551, 552, 515, 552, 516, 516,
    552, 553, 516, 553, 517, 517, 553, 554, 517, 554, 518, 518, 554, 555, 518, 555, 519, 519, 555,
    556, 519, 556, 520, 520, 556, 557, 520, 557, 521, 521, 557, 558, 521, 558, 522, 522, 558, 559,
    522, 559, 523, 523, 559, 560, 523, 560, 524, 524, 560, 561, 524, 561, 525, 525, 561, 562, 525,
    562, 526, 526, 562, 563, 526, 563, 527, 527, 563, 564, 527, 564, 528, 528, 564, 565, 528, 565,
    529, 529, 565, 566, 529, 566, 530, 530, 566, 567, 530, 567, 531, 531, 567, 568, 531, 568, 532,
    532, 568, 569, 532, 569, 533, 533, 569, 570, 533, 570, 534, 534, 570, 571, 534, 571, 535, 535,
    571, 572, 535, 572, 536, 536, 572, 573, 536, 573, 537, 537, 573, 574, 537, 574, 538, 538, 574,
    575, 538, 575, 539, 539, 575, 540, 539, 540, 504, 540, 576, 577, 540, 577, 541, 541, 577, 578,
    541, 578, 542, 542, 578, 579, 542, 579, 543, 543, 579, 580, 543, 580, 544, 544, 580, 581, 544,
    581, 545, 545, 581, 582, 545, 582, 546, 546, 582, 583, 546, 583, 547, 547, 583, 584, 547, 584,
    548, 548, 584, 585, 548, 585, 549, 549, 585, 586, 549, 586, 550, 550, 586, 587, 550, 587, 551,
    551, 587, 588, 551, 588, 552, 552, 588, 589, 552, 589, 553, 553, 589, 590, 553, 590, 554, 554,
    590, 591, 554, 591, 555, 555, 591, 592, 555, 592, 556, 556, 592, 593, 556, 593, 557, 557, 593,
    594, 557, 594, 558, 558, 594, 595, 558, 595, 559, 559, 595, 596, 559, 596, 560, 560, 596, 597,
    560, 597, 561, 561, 597, 598, 561, 598, 562, 562, 598, 599, 562, 599, 563, 563, 599, 600, 563,
    600, 564, 564, 600, 601, 564, 601, 565, 565, 601, 602, 565, 602, 566, 566, 602, 603, 566, 603,
    567, 567, 603, 604, 567, 604, 568, 568, 604, 605, 568, 605, 569, 569, 605, 606, 569, 606, 570,
    570, 606, 607, 570, 607, 571, 571, 607, 608, 571, 608, 572, 572, 608, 609, 572, 609, 573, 573,
    609, 610, 573, 610, 574, 574, 610, 611, 574, 611, 575, 575, 611, 576, 575, 576, 540, 576, 612,
    613, 576, 613, 577, 577, 613, 614, 577, 614, 578, 578, 614, 615, 578, 615, 579, 579, 615, 616,
    579, 616, 580, 580, 616, 617, 580, 617, 581, 581, 617, 618, 581, 618, 582, 582, 618, 619, 582,
    619, 583, 583, 619, 620, 583, 620, 584, 584, 620, 621, 584, 621, 585, 585, 621, 622, 585, 622,
    586, 586, 622, 623, 586, 623, 587, 587, 623, 624, 587, 624, 588, 588, 624, 625, 588, 625, 589,
    589, 625, 626, 589, 626, 590, 590, 626, 627, 590, 627, 591, 591, 627, 628, 591, 628, 592, 592,
    628, 629, 592, 629, 593, 593, 629, 630, 593, 630, 594, 594, 630, 631, 594, 631, 595, 595, 631,
    632, 595, 632, 596, 596, 632, 633, 596, 633, 597, 597, 633, 634, 597, 634, 598, 598, 634, 635,
    598, 635, 599, 599, 635, 636, 599, 636, 600, 600, 636, 637, 600, 637, 601, 601, 637, 638, 601,
    638, 602, 602, 638, 639, 602, 639, 603, 603, 639, 640, 603, 640, 604, 604, 640, 641, 604, 641,
    605, 605, 641, 642, 605, 642, 606, 606, 642, 643, 606, 643, 607, 607, 643, 644, 607, 644, 608,
    608, 644, 645, 608, 645, 609, 609, 645, 646, 609, 646, 610, 610, 646, 647, 610, 647, 611, 611,
    647, 612, 611, 612, 576, 612, 648, 649, 612, 649, 613, 613, 649, 650, 613, 650, 614, 614, 650,
    651, 614, 651, 615, 615, 651, 652, 615, 652, 616, 616, 652, 653, 616, 653, 617, 617, 653, 654,
    617, 654, 618, 618, 654, 655, 618, 655, 619, 619, 655, 656, 619, 656, 620, 620, 656, 657, 620,
    657, 621, 621, 657, 658, 621, 658, 622, 622, 658, 659, 622, 659, 623, 623, 659, 660, 623, 660,
    624, 624, 660, 661, 624, 661, 625, 625, 661, 662, 625, 662, 626, 626, 662, 663, 626, 663, 627,
    627, 663, 664, 627, 664, 628, 628, 664, 665, 628, 665, 629, 629, 665, 666, 629, 666, 630, 630,
    666, 667, 630, 667, 631, 631, 667, 668, 631, 668, 632, 632, 668, 669, 632, 669, 633, 633, 669,
    670, 633, 670, 634, 634, 670, 671, 634, 671, 635, 635, 671, 672, 635, 672, 636, 636, 672, 673,
    636, 673, 637, 637, 673, 674, 637, 674, 638, 638, 674, 675, 638, 675, 639, 639, 675, 676, 639,
    676, 640, 640, 676, 677, 640, 677, 641, 641, 677, 678, 641, 678, 642, 642, 678, 679, 642, 679,
    643, 643, 679, 680, 643, 680, 644, 644, 680, 681, 644, 681, 645, 645, 681, 682, 645, 682, 646,
    646, 682, 683, 646, 683, 647, 647, 683, 648, 647, 648, 612, 648, 684, 685, 648, 685, 649, 649,
    685, 686, 649, 686, 650, 650, 686, 687, 650, 687, 651, 651, 687, 688, 651, 688, 652, 652, 688,
    689, 652, 689, 653, 653, 689, 690, 653, 690, 654, 654, 690, 691, 654, 691, 655, 655, 691, 692,
    655, 692, 656, 656, 692, 693, 656, 693, 657, 657, 693, 694, 657, 694, 658, 658, 694, 695, 658,
    695, 659, 659, 695, 696, 659, 696, 660, 660, 696, 697, 660, 697, 661, 661, 697, 698, 661, 698,
    662, 662, 698, 699, 662, 699, 663, 663, 699, 700, 663, 700, 664, 664, 700, 701, 664, 701, 665,
    665, 701, 702, 665, 702, 666, 666, 702, 703, 666, 703, 667, 667, 703, 704, 667, 704, 668, 668,
    704, 705, 668, 705, 669, 669, 705, 706, 669, 706, 670, 670, 706, 707, 670, 707, 671, 671, 707,
    708, 671, 708, 672, 672, 708, 709, 672, 709, 673, 673, 709, 710, 673, 710, 674, 674, 710, 711,
    674, 711, 675, 675, 711, 712, 675, 712, 676, 676, 712, 713, 676, 713, 677, 677, 713, 714, 677,
    714, 678, 678, 714, 715, 678, 715, 679, 679, 715, 716, 679, 716, 680, 680, 716, 717, 680, 717,
    681, 681, 717, 718, 681, 718, 682, 682, 718, 719, 682, 719, 683, 683, 719, 684, 683, 684, 648,
    720, 732, 733, 720, 733, 721, 721, 733, 734, 721, 734, 722, 722, 734, 735, 722, 735, 723, 723,
    735, 736, 723, 736, 724, 724, 736, 737, 724, 737, 725, 725, 737, 738, 725, 738, 726, 726, 738,
    739, 726, 739, 727, 727, 739, 740, 727, 740, 728, 728, 740, 741, 728, 741, 729, 729, 741, 742,
    729, 742, 730, 730, 742, 743, 730, 743, 731, 731, 743, 732, 731, 732, 720, 732, 744, 745, 732,
    745, 733, 733, 745, 746, 733, 746, 734, 734, 746, 747, 734, 747, 735, 735, 747, 748, 735, 748,
    736, 736, 748, 749, 736, 749, 737, 737, 749, 750, 737, 750, 738, 738, 750, 751, 738, 751, 739,
    739, 751, 752, 739, 752, 740, 740, 752, 753, 740, 753, 741, 741, 753, 754, 741, 754, 742, 742,
    754, 755, 742, 755, 743, 743, 755, 744, 743, 744, 732, 744, 756, 757, 744, 757, 745, 745, 757,
    758, 745, 758, 746, 746, 758, 759, 746, 759, 747, 747, 759, 760, 747, 760, 748, 748, 760, 761,
    748, 761, 749, 749, 761, 762, 749, 762, 750, 750, 762, 763, 750, 763, 751, 751, 763, 764, 751,
    764, 752, 752, 764, 765, 752, 765, 753, 753, 765, 766, 753, 766, 754, 754, 766, 767, 754, 767,
    755, 755, 767, 756, 755, 756, 744, 756, 768, 769, 756, 769, 757, 757, 769, 770, 757, 770, 758,
    758, 770, 771, 758, 771, 759, 759, 771, 772, 759, 772, 760, 760, 772, 773, 760, 773, 761, 761,
    773, 774, 761, 774, 762, 762, 774, 775, 762, 775, 763, 763, 775, 776, 763, 776, 764, 764, 776,
    777, 764, 777, 765, 765, 777, 778, 765, 778, 766, 766, 778, 779, 766, 779, 767, 767, 779, 768,
    767, 768, 756, 768, 780, 781, 768, 781, 769, 769, 781, 782, 769, 782, 770, 770, 782, 783, 770,
    783, 771, 771, 783, 784, 771, 784, 772, 772, 784, 785, 772, 785, 773, 773, 785, 786, 773, 786,
    774, 774, 786, 787, 774, 787, 775, 775, 787, 788, 775, 788, 776, 776, 788, 789, 776, 789, 777,
    777, 789, 790, 777, 790, 778, 778, 790, 791, 778, 791, 779, 779, 791, 780, 779, 780, 768, 780,
    792, 793, 780, 793, 781, 781, 793, 794, 781, 794, 782, 782, 794, 795, 782, 795, 783, 783, 795,
    796, 783, 796, 784, 784, 796, 797, 784, 797, 785, 785, 797, 798, 785, 798, 786, 786, 798, 799,
    786, 799, 787, 787, 799, 800, 787, 800, 788, 788, 800, 801, 788, 801, 789, 789, 801, 802, 789,
    802, 790, 790, 802, 803, 790, 803, 791, 791, 803, 792, 791, 792, 780, 792, 804, 805, 792, 805,
    793, 793, 805, 806, 793, 806, 794, 794, 806, 807, 794, 807, 795, 795, 807, 808, 795, 808, 796,
    796, 808, 809, 796, 809, 797, 797, 809, 810, 797, 810, 798, 798, 810, 811, 798, 811, 799, 799,
    811, 812, 799, 812, 800, 800, 812, 813, 800, 813, 801, 801, 813, 814, 801, 814, 802, 802, 814,
    815, 802, 815, 803, 803, 815, 804, 803, 804, 792, 804, 816, 817, 804, 817, 805, 805, 817, 818,
    805, 818, 806, 806, 818, 819, 806, 819, 807, 807, 819, 820, 807, 820, 808, 808, 820, 821, 808,
    821, 809, 809, 821, 822, 809, 822, 810, 810, 822, 823, 810, 823, 811, 811, 823, 824, 811, 824,
    812, 812, 824, 825, 812, 825, 813, 813, 825, 826, 813, 826, 814, 814, 826, 827, 814, 827, 815,
    815, 827, 816, 815, 816, 804, 816, 828, 829, 816, 829, 817, 817, 829, 830, 817, 830, 818, 818,
    830, 831, 818, 831, 819, 819, 831, 832, 819, 832, 820, 820, 832, 833, 820, 833, 821, 821, 833,
    834, 821, 834, 822, 822, 834, 835, 822, 835, 823, 823, 835, 836, 823, 836, 824, 824, 836, 837,
    824, 837, 825, 825, 837, 838, 825, 838, 826, 826, 838, 839, 826, 839, 827, 827, 839, 828, 827,
    828, 816, 828, 840, 841, 828, 841, 829, 829, 841, 842, 829, 842, 830, 830, 842, 843, 830, 843,
    831, 831, 843, 844, 831, 844, 832, 832, 844, 845, 832, 845, 833, 833, 845, 846, 833, 846, 834,
    834, 846, 847, 834, 847, 835, 835, 847, 848, 835, 848, 836, 836, 848, 849, 836, 849, 837, 837,
    849, 850, 837, 850, 838, 838, 850, 851, 838, 851, 839, 839, 851, 840, 839, 840, 828, 840, 852,
    853, 840, 853, 841, 841, 853, 854, 841, 854, 842, 842, 854, 855, 842, 855, 843, 843, 855, 856,
    843, 856, 844, 844, 856, 857, 844, 857, 845, 845, 857, 858, 845, 858, 846, 846, 858, 859, 846,
    859, 847, 847, 859, 860, 847, 860, 848, 848, 860, 861, 848, 861, 849, 849, 861, 862, 849, 862,
    850, 850, 862, 863, 850, 863, 851, 851, 863, 852, 851, 852, 840, 852, 864, 865, 852, 865, 853,
    853, 865, 866, 853, 866, 854, 854, 866, 867, 854, 867, 855, 855, 867, 868, 855, 868, 856, 856,
    868, 869, 856, 869, 857, 857, 869, 870, 857, 870, 858, 858, 870, 871, 858, 871, 859, 859, 871,
    872, 859, 872, 860, 860, 872, 873, 860, 873, 861, 861, 873, 874, 861, 874, 862, 862, 874, 875,
    862, 875, 863, 863, 875, 864, 863, 864, 852, 864, 876, 877, 864, 877, 865, 865, 877, 878, 865,
    878, 866, 866, 878, 879, 866, 879, 867, 867, 879, 880, 867, 880, 868, 868, 880, 881, 868, 881,
    869, 869, 881, 882, 869, 882, 870, 870, 882, 883, 870, 883, 871, 871, 883, 884, 871, 884, 872,
    872, 884, 885, 872, 885, 873, 873, 885, 886, 873, 886, 874, 874, 886, 887, 874, 887, 875, 875,
    887, 876, 875, 876, 864, 876, 888, 889, 876, 889, 877, 877, 889, 890, 877, 890, 878, 878, 890,
    891, 878, 891, 879, 879, 891, 892, 879, 892, 880, 880, 892, 893, 880, 893, 881, 881, 893, 894,
    881, 894, 882, 882, 894, 895, 882, 895, 883, 883, 895, 896, 883, 896, 884, 884, 896, 897, 884,
    897, 885, 885, 897, 898, 885, 898, 886, 886, 898, 899, 886, 899, 887, 887, 899, 888, 887, 888,
    876, 888, 900, 901, 888, 901, 889, 889, 901, 902, 889, 902, 890, 890, 902, 903, 890, 903, 891,
    891, 903, 904, 891, 904, 892, 892, 904, 905, 892, 905, 893, 893, 905, 906, 893, 906, 894, 894,
    906, 907, 894, 907, 895, 895, 907, 908, 895, 908, 896, 896, 908, 909, 896, 909, 897, 897, 909,
    910, 897, 910, 898, 898, 910, 911, 898, 911, 899, 899, 911, 900, 899, 900, 888, 900, 912, 913,
    900, 913, 901, 901, 913, 914, 901, 914, 902, 902, 914, 915, 902, 915, 903, 903, 915, 916, 903,
    916, 904, 904, 916, 917, 904, 917, 905, 905, 917, 918, 905, 918, 906, 906, 918, 919, 906, 919,
    907, 907, 919, 920, 907, 920, 908, 908, 920, 921, 908, 921, 909, 909, 921, 922, 909, 922, 910,
    910, 922, 923, 910, 923, 911, 911, 923, 912, 911, 912, 900, 912, 924, 925, 912, 925, 913, 913,
    925, 926, 913, 926, 914, 914, 926, 927, 914, 927, 915, 915, 927, 928, 915, 928, 916, 916, 928,
    929, 916, 929, 917, 917, 929, 930, 917, 930, 918, 918, 930, 931, 918, 931, 919, 919, 931, 932,
    919, 932, 920, 920, 932, 933, 920, 933, 921, 921, 933, 934, 921, 934, 922, 922, 934, 935, 922,
    935, 923, 923, 935, 924, 923, 924, 912, 924, 936, 937, 924, 937, 925, 925, 937, 938, 925, 938,
    926, 926, 938, 939, 926, 939, 927, 927, 939, 940, 927, 940, 928, 928, 940, 941, 928, 941, 929,
    929, 941, 942, 929, 942, 930, 930, 942, 943, 930, 943, 931, 931, 943, 944, 931, 944, 932, 932,
    944, 945, 932, 945, 933, 933, 945, 946, 933, 946, 934, 934, 946, 947, 934, 947, 935, 935, 947,
    936, 935, 936, 924, 936, 948, 949, 936, 949, 937, 937, 949, 950, 937, 950, 938, 938, 950, 951,
    938, 951, 939, 939, 951, 952, 939, 952, 940, 940, 952, 953, 940, 953, 941, 941, 953, 954, 941,
    954, 942, 942, 954, 955, 942, 955, 943, 943, 955, 956, 943, 956, 944, 944, 956, 957, 944, 957,
    945, 945, 957, 958, 945, 958, 946, 946, 958, 959, 946, 959, 947, 947, 959, 948, 947, 948, 936,
    948, 960, 961, 948, 961, 949, 949, 961, 962, 949, 962, 950, 950, 962, 963, 950, 963, 951, 951,
    963, 964, 951, 964, 952, 952, 964, 965, 952, 965, 953, 953, 965, 966, 953, 966, 954, 954, 966,
    967, 954, 967, 955, 955, 967, 968, 955, 968, 956, 956, 968, 969, 956, 969, 957, 957, 969, 970,
    957, 970, 958, 958, 970, 971, 958, 971, 959, 959, 971, 960, 959, 960, 948, 960, 972, 973, 960,
    973, 961, 961, 973, 974, 961, 974, 962, 962, 974, 975, 962, 975, 963, 963, 975, 976, 963, 976,
    964, 964, 976, 977, 964, 977, 965, 965, 977, 978, 965, 978, 966, 966, 978, 979, 966, 979, 967,
    967, 979, 980, 967, 980, 968, 968, 980, 981, 968, 981, 969, 969, 981, 982, 969, 982, 970, 970,
    982, 983, 970, 983, 971, 971, 983, 972, 971, 972, 960, 972, 984, 985, 972, 985, 973, 973, 985,
    986, 973, 986, 974, 974, 986, 987, 974, 987, 975, 975, 987, 988, 975, 988, 976, 976, 988, 989,
    976, 989, 977, 977, 989, 990, 977, 990, 978, 978, 990, 991, 978, 991, 979, 979, 991, 992, 979,
    992, 980, 980, 992, 993, 980, 993, 981, 981, 993, 994, 981, 994, 982, 982, 994, 995, 982, 995,
    983, 983, 995, 984, 983, 984, 972, 984, 996, 997, 984, 997, 985, 985, 997, 998, 985, 998, 986,
    986, 998, 999, 986, 999, 987, 987, 999, 1000, 987, 1000, 988, 988, 1000, 1001, 988, 1001, 989,
    989, 1001, 1002, 989, 1002, 990, 990, 1002, 1003, 990, 1003, 991, 991, 1003, 1004, 991, 1004,
    992, 992, 1004, 1005, 992, 1005, 993, 993, 1005, 1006, 993, 1006, 994, 994, 1006, 1007, 994,
    1007, 995, 995, 1007, 996, 995, 996, 984, 996, 1008, 1009, 996, 1009, 997, 997, 1009, 1010,
    997, 1010, 998, 998, 1010, 1011, 998, 1011, 999, 999, 1011, 1012, 999, 1012, 1000, 1000, 1012,
    1013, 1000, 1013, 1001, 1001, 1013, 1014, 1001, 1014, 1002, 1002, 1014, 1015, 1002, 1015,
    1003, 1003, 1015, 1016, 1003, 1016, 1004, 1004, 1016, 1017, 1004, 1017, 1005, 1005, 1017,
    1018, 1005, 1018, 1006, 1006, 1018, 1019, 1006, 1019, 1007, 1007, 1019, 1008, 1007, 1008, 996,
    1008, 1020, 1021, 1008, 1021, 1009, 1009, 1021, 1022, 1009, 1022, 1010, 1010, 1022, 1023,
    1010, 1023, 1011, 1011, 1023, 1024, 1011, 1024, 1012, 1012, 1024, 1025, 1012, 1025, 1013,
    1013, 1025, 1026, 1013, 1026, 1014, 1014, 1026, 1027, 1014, 1027, 1015, 1015, 1027, 1028,
    1015, 1028, 1016, 1016, 1028, 1029, 1016, 1029, 1017, 1017, 1029, 1030, 1017, 1030, 1018,
    1018, 1030, 1031, 1018, 1031, 1019, 1019, 1031, 1020, 1019, 1020, 1008, 1020, 1032, 1033,
    1020, 1033, 1021, 1021, 1033, 1034, 1021, 1034, 1022, 1022, 1034, 1035, 1022, 1035, 1023,
    1023, 1035, 1036, 1023, 1036, 1024, 1024, 1036, 1037, 1024, 1037, 1025, 1025, 1037, 1038,
    1025, 1038, 1026, 1026, 1038, 1039, 1026, 1039, 1027, 1027, 1039, 1040, 1027, 1040, 1028,
    1028, 1040, 1041, 1028, 1041, 1029, 1029, 1041, 1042, 1029, 1042, 1030, 1030, 1042, 1043,
    1030, 1043, 1031, 1031, 1043, 1032, 1031, 1032, 1020, 1032, 1044, 1045, 1032, 1045, 1033,
    1033, 1045, 1046, 1033, 1046, 1034, 1034, 1046, 1047, 1034, 1047, 1035, 1035, 1047, 1048,
    1035, 1048, 1036, 1036, 1048, 1049, 1036, 1049, 1037, 1037, 1049, 1050, 1037, 1050, 1038,
    1038, 1050, 1051, 1038, 1051, 1039, 1039, 1051, 1052, 1039, 1052, 1040, 1040, 1052, 1053,
    1040, 1053, 1041, 1041, 1053, 1054, 1041, 1054, 1042, 1042, 1054, 1055, 1042, 1055, 1043,
    1043, 1055, 1044, 1043, 1044, 1032, 1056, 1068, 1069, 1056, 1069, 1057, 1057, 1069, 1070,
    1057, 1070, 1058, 1058, 1070, 1071, 1058, 1071, 1059, 1059, 1071, 1072, 1059, 1072, 1060,
    1060, 1072, 1073, 1060, 1073, 1061, 1061, 1073, 1074, 1061, 1074, 1062, 1062, 1074, 1075,
    1062, 1075, 1063, 1063, 1075, 1076, 1063, 1076, 1064, 1064, 1076, 1077, 1064, 1077, 1065,
    1065, 1077, 1078, 1065, 1078, 1066, 1066, 1078, 1079, 1066, 1079, 1067, 1067, 1079, 1068,
    1067, 1068, 1056, 1068, 1080, 1081, 1068, 1081, 1069, 1069, 1081, 1082, 1069, 1082, 1070,
    1070, 1082, 1083, 1070, 1083, 1071, 1071, 1083, 1084, 1071, 1084, 1072, 1072, 1084, 1085,
    1072, 1085, 1073, 1073, 1085, 1086, 1073, 1086, 1074, 1074, 1086, 1087, 1074, 1087, 1075,
    1075, 1087, 1088, 1075, 1088, 1076, 1076, 1088, 1089, 1076, 1089, 1077, 1077, 1089, 1090,
    1077, 1090, 1078, 1078, 1090, 1091, 1078, 1091, 1079, 1079, 1091, 1080, 1079, 1080, 1068,
    1080, 1092, 1093, 1080, 1093, 1081, 1081, 1093, 1094, 1081, 1094, 1082, 1082, 1094, 1095,
    1082, 1095, 1083, 1083, 1095, 1096, 1083, 1096, 1084, 1084, 1096, 1097, 1084, 1097, 1085,
    1085, 1097, 1098, 1085, 1098, 1086, 1086, 1098, 1099, 1086, 1099, 1087, 1087, 1099, 1100,
    1087, 1100, 1088, 1088, 1100, 1101, 1088, 1101, 1089, 1089, 1101, 1102, 1089, 1102, 1090,
    1090, 1102, 1103, 1090, 1103, 1091, 1091, 1103, 1092, 1091, 1092, 1080, 1092, 1104, 1105,
    1092, 1105, 1093, 1093, 1105, 1106, 1093, 1106, 1094, 1094, 1106, 1107, 1094, 1107, 1095,
    1095, 1107, 1108, 1095, 1108, 1096, 1096, 1108, 1109, 1096, 1109, 1097, 1097, 1109, 1110,
    1097, 1110, 1098, 1098, 1110, 1111, 1098, 1111, 1099, 1099, 1111, 1112, 1099, 1112, 1100,
    1100, 1112, 1113, 1100, 1113, 1101, 1101, 1113, 1114, 1101, 1114, 1102, 1102, 1114, 1115,
    1102, 1115, 1103, 1103, 1115, 1104, 1103, 1104, 1092, 1104, 1116, 1117, 1104, 1117, 1105,
    1105, 1117, 1118, 1105, 1118, 1106, 1106, 1118, 1119, 1106, 1119, 1107, 1107, 1119, 1120,
    1107, 1120, 1108, 1108, 1120, 1121, 1108, 1121, 1109, 1109, 1121, 1122, 1109, 1122, 1110,
    1110, 1122, 1123, 1110, 1123, 1111, 1111, 1123, 1124, 1111, 1124, 1112, 1112, 1124, 1125,
    1112, 1125, 1113, 1113, 1125, 1126, 1113, 1126, 1114, 1114, 1126, 1127, 1114, 1127, 1115,
    1115, 1127, 1116, 1115, 1116, 1104, 1116, 1128, 1129, 1116, 1129, 1117, 1117, 1129, 1130,
    1117, 1130, 1118, 1118, 1130, 1131, 1118, 1131, 1119, 1119, 1131, 1132, 1119, 1132, 1120,
    1120, 1132, 1133, 1120, 1133, 1121, 1121, 1133, 1134, 1121, 1134, 1122, 1122, 1134, 1135,
    1122, 1135, 1123, 1123, 1135, 1136, 1123, 1136, 1124, 1124, 1136, 1137, 1124, 1137, 1125,
    1125, 1137, 1138, 1125, 1138, 1126, 1126, 1138, 1139, 1126, 1139, 1127, 1127, 1139, 1128,
    1127, 1128, 1116, 1128, 1140, 1141, 1128, 1141, 1129, 1129, 1141, 1142, 1129, 1142, 1130,
    1130, 1142, 1143, 1130, 1143, 1131, 1131, 1143, 1144, 1131, 1144, 1132, 1132, 1144, 1145,
    1132, 1145, 1133, 1133, 1145, 1146, 1133, 1146, 1134, 1134, 1146, 1147, 1134, 1147, 1135,
    1135, 1147, 1148, 1135, 1148, 1136, 1136, 1148, 1149, 1136, 1149, 1137, 1137, 1149, 1150,
    1137, 1150, 1138, 1138, 1150, 1151, 1138, 1151, 1139, 1139, 1151, 1140, 1139, 1140, 1128,
    1140, 1152, 1153, 1140, 1153, 1141, 1141, 1153, 1154, 1141, 1154, 1142, 1142, 1154, 1155,
    1142, 1155, 1143, 1143, 1155, 1156, 1143, 1156, 1144, 1144, 1156, 1157, 1144, 1157, 1145,
    1145, 1157, 1158, 1145, 1158, 1146, 1146, 1158, 1159, 1146, 1159, 1147, 1147, 1159, 1160,
    1147, 1160, 1148, 1148, 1160, 1161, 1148, 1161, 1149, 1149, 1161, 1162, 1149, 1162, 1150,
    1150, 1162, 1163, 1150, 1163, 1151, 1151, 1163, 1152, 1151, 1152, 1140, 1152, 1164, 1165,
    1152, 1165, 1153, 1153, 1165, 1166, 1153, 1166, 1154, 1154, 1166, 1167, 1154, 1167, 1155,
    1155, 1167, 1168, 1155, 1168, 1156, 1156, 1168, 1169, 1156, 1169, 1157, 1157, 1169, 1170,
    1157, 1170, 1158, 1158, 1170, 1171, 1158, 1171, 1159, 1159, 1171, 1172, 1159, 1172, 1160,
    1160, 1172, 1173, 1160, 1173, 1161, 1161, 1173, 1174, 1161, 1174, 1162, 1162, 1174, 1175,
    1162, 1175, 1163, 1163, 1175, 1164, 1163, 1164, 1152,
];

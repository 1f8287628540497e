//! # Small and medium sized problems with known solutions
//!
//! Includes a 216 variable model that is mostly made up of equality constraints, written as
//! strings like `x0 + x1 - x12 = 0`.
use dense_simplex::data::linear_program::constraint::LinearConstraint;
use dense_simplex::data::linear_program::elements::Relationship;
use dense_simplex::data::linear_program::expression::LinearExpression;


/// Install a logger, such that `RUST_LOG=trace` shows the pivots.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a constraint with unit coefficients.
///
/// # Arguments
///
/// * `nr_variables`: Length of the coefficient vector.
/// * `equation`: Terms separated by ` + ` or ` - `, followed by a relationship and a value. For
/// example: `x0 + x1 - x12 = 0`.
fn equation_from_string(nr_variables: usize, equation: &str) -> LinearConstraint<f64> {
    let (relationship, separator) = if equation.contains(">=") {
        (Relationship::Geq, ">=")
    } else if equation.contains("<=") {
        (Relationship::Leq, "<=")
    } else {
        (Relationship::Eq, "=")
    };
    let (left, right) = equation.split_once(separator).unwrap();
    let value = right.trim().parse::<f64>().unwrap();

    let mut coefficients = vec![0f64; nr_variables];
    let mut sign = 1f64;
    for token in left.split_whitespace() {
        match token {
            "+" => sign = 1f64,
            "-" => sign = -1f64,
            variable => {
                let index = variable.trim_start_matches('x').parse::<usize>().unwrap();
                coefficients[index] = sign;
                sign = 1f64;
            },
        }
    }

    LinearConstraint::new(coefficients, relationship, value)
}

const LARGE_MODEL_NR_VARIABLES: usize = 216;

fn large_model_objective() -> LinearExpression<f64> {
    let expensive = [12, 40, 68, 96, 124, 152];
    let coefficients = (0..LARGE_MODEL_NR_VARIABLES)
        .map(|j| if expensive.contains(&j) { 12f64 } else { 1f64 })
        .collect();

    LinearExpression::new(coefficients, 0f64)
}

fn large_model_constraints() -> Vec<LinearConstraint<f64>> {
    LARGE_MODEL_CONSTRAINTS.iter()
        .map(|equation| equation_from_string(LARGE_MODEL_NR_VARIABLES, equation))
        .collect()
}

const LARGE_MODEL_CONSTRAINTS: [&str; 93] = [
    "x0 + x1 + x2 + x3 - x12 = 0",
    "x4 + x5 + x6 + x7 + x8 + x9 + x10 + x11 - x13 = 0",
    "x4 + x5 + x6 + x7 + x8 + x9 + x10 + x11 >= 49",
    "x0 + x1 + x2 + x3 >= 42",
    "x14 + x15 + x16 + x17 - x26 = 0",
    "x18 + x19 + x20 + x21 + x22 + x23 + x24 + x25 - x27 = 0",
    "x14 + x15 + x16 + x17 - x12 = 0",
    "x18 + x19 + x20 + x21 + x22 + x23 + x24 + x25 - x13 = 0",
    "x28 + x29 + x30 + x31 - x40 = 0",
    "x32 + x33 + x34 + x35 + x36 + x37 + x38 + x39 - x41 = 0",
    "x32 + x33 + x34 + x35 + x36 + x37 + x38 + x39 >= 49",
    "x28 + x29 + x30 + x31 >= 42",
    "x42 + x43 + x44 + x45 - x54 = 0",
    "x46 + x47 + x48 + x49 + x50 + x51 + x52 + x53 - x55 = 0",
    "x42 + x43 + x44 + x45 - x40 = 0",
    "x46 + x47 + x48 + x49 + x50 + x51 + x52 + x53 - x41 = 0",
    "x56 + x57 + x58 + x59 - x68 = 0",
    "x60 + x61 + x62 + x63 + x64 + x65 + x66 + x67 - x69 = 0",
    "x60 + x61 + x62 + x63 + x64 + x65 + x66 + x67 >= 51",
    "x56 + x57 + x58 + x59 >= 44",
    "x70 + x71 + x72 + x73 - x82 = 0",
    "x74 + x75 + x76 + x77 + x78 + x79 + x80 + x81 - x83 = 0",
    "x70 + x71 + x72 + x73 - x68 = 0",
    "x74 + x75 + x76 + x77 + x78 + x79 + x80 + x81 - x69 = 0",
    "x84 + x85 + x86 + x87 - x96 = 0",
    "x88 + x89 + x90 + x91 + x92 + x93 + x94 + x95 - x97 = 0",
    "x88 + x89 + x90 + x91 + x92 + x93 + x94 + x95 >= 51",
    "x84 + x85 + x86 + x87 >= 44",
    "x98 + x99 + x100 + x101 - x110 = 0",
    "x102 + x103 + x104 + x105 + x106 + x107 + x108 + x109 - x111 = 0",
    "x98 + x99 + x100 + x101 - x96 = 0",
    "x102 + x103 + x104 + x105 + x106 + x107 + x108 + x109 - x97 = 0",
    "x112 + x113 + x114 + x115 - x124 = 0",
    "x116 + x117 + x118 + x119 + x120 + x121 + x122 + x123 - x125 = 0",
    "x116 + x117 + x118 + x119 + x120 + x121 + x122 + x123 >= 49",
    "x112 + x113 + x114 + x115 >= 42",
    "x126 + x127 + x128 + x129 - x138 = 0",
    "x130 + x131 + x132 + x133 + x134 + x135 + x136 + x137 - x139 = 0",
    "x126 + x127 + x128 + x129 - x124 = 0",
    "x130 + x131 + x132 + x133 + x134 + x135 + x136 + x137 - x125 = 0",
    "x140 + x141 + x142 + x143 - x152 = 0",
    "x144 + x145 + x146 + x147 + x148 + x149 + x150 + x151 - x153 = 0",
    "x144 + x145 + x146 + x147 + x148 + x149 + x150 + x151 >= 59",
    "x140 + x141 + x142 + x143 >= 42",
    "x154 + x155 + x156 + x157 - x166 = 0",
    "x158 + x159 + x160 + x161 + x162 + x163 + x164 + x165 - x167 = 0",
    "x154 + x155 + x156 + x157 - x152 = 0",
    "x158 + x159 + x160 + x161 + x162 + x163 + x164 + x165 - x153 = 0",
    "x83 + x82 - x168 = 0",
    "x111 + x110 - x169 = 0",
    "x170 - x182 = 0",
    "x171 - x183 = 0",
    "x172 - x184 = 0",
    "x173 - x185 = 0",
    "x174 - x186 = 0",
    "x175 + x176 - x187 = 0",
    "x177 - x188 = 0",
    "x178 - x189 = 0",
    "x179 - x190 = 0",
    "x180 - x191 = 0",
    "x181 - x192 = 0",
    "x170 - x26 = 0",
    "x171 - x27 = 0",
    "x172 - x54 = 0",
    "x173 - x55 = 0",
    "x174 - x168 = 0",
    "x177 - x169 = 0",
    "x178 - x138 = 0",
    "x179 - x139 = 0",
    "x180 - x166 = 0",
    "x181 - x167 = 0",
    "x193 - x205 = 0",
    "x194 - x206 = 0",
    "x195 - x207 = 0",
    "x196 - x208 = 0",
    "x197 - x209 = 0",
    "x198 + x199 - x210 = 0",
    "x200 - x211 = 0",
    "x201 - x212 = 0",
    "x202 - x213 = 0",
    "x203 - x214 = 0",
    "x204 - x215 = 0",
    "x193 - x182 = 0",
    "x194 - x183 = 0",
    "x195 - x184 = 0",
    "x196 - x185 = 0",
    "x197 - x186 = 0",
    "x198 + x199 - x187 = 0",
    "x200 - x188 = 0",
    "x201 - x189 = 0",
    "x202 - x190 = 0",
    "x203 - x191 = 0",
    "x204 - x192 = 0",
];

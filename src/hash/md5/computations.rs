use super::{K, S};

/// Round 1: `if b then c else d`.
#[inline(always)]
pub fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

/// Round 2: `if d then b else c`.
#[inline(always)]
pub fn g(b: u32, c: u32, d: u32) -> u32 {
    (d & b) | (!d & c)
}

#[inline(always)]
pub fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
pub fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Index of the message word consumed by step `j`.
#[inline(always)]
pub const fn message_index(j: usize) -> usize {
    match j / 16 {
        0 => j,
        1 => (5 * j + 1) % 16,
        2 => (3 * j + 5) % 16,
        _ => (7 * j) % 16,
    }
}

/// Runs the 64 steps over the little-endian words of one block and folds
/// the result into `state`.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 4], m: &[u32; 16]) {
    let [mut a, mut b, mut c, mut d] = *state;

    for j in 0..64 {
        let mix = match j / 16 {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };

        let sum = mix
            .wrapping_add(a)
            .wrapping_add(K[j])
            .wrapping_add(m[message_index(j)]);

        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(sum.rotate_left(S[j]));
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d]) {
        *s = s.wrapping_add(v);
    }
}

/// Unrolled form of the 64 steps. Produces the same state as the loop.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 4], m: &[u32; 16]) {
    let [mut a, mut b, mut c, mut d] = *state;

    macro_rules! step {
        ($fun:ident, $a:ident, $b:ident, $c:ident, $d:ident, $j:expr) => {
            $a = $b.wrapping_add(
                $a.wrapping_add($fun($b, $c, $d))
                    .wrapping_add(K[$j])
                    .wrapping_add(m[message_index($j)])
                    .rotate_left(S[$j]),
            )
        };
    }

    macro_rules! quad {
        ($fun:ident, $j:expr) => {
            step!($fun, a, b, c, d, $j);
            step!($fun, d, a, b, c, $j + 1);
            step!($fun, c, d, a, b, $j + 2);
            step!($fun, b, c, d, a, $j + 3);
        };
    }

    quad!(f, 0);
    quad!(f, 4);
    quad!(f, 8);
    quad!(f, 12);

    quad!(g, 16);
    quad!(g, 20);
    quad!(g, 24);
    quad!(g, 28);

    quad!(h, 32);
    quad!(h, 36);
    quad!(h, 40);
    quad!(h, 44);

    quad!(i, 48);
    quad!(i, 52);
    quad!(i, 56);
    quad!(i, 60);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

//! Tileable 3D gradient (Perlin) noise.

use glam::{UVec3, Vec3};

use super::permutation::PermutationTable;
use super::{validate_tiles, NoiseError};

/// Hash values for the eight corners of one lattice cell.
///
/// Field names encode the corner: `a` is the cell origin on that axis, `b`
/// the next lattice point, in x/y/z order (`bab` = x+1, y, z+1).
struct HashCube {
    aaa: u32,
    aab: u32,
    aba: u32,
    abb: u32,
    baa: u32,
    bab: u32,
    bba: u32,
    bbb: u32,
}

/// Quintic fade `6t^5 - 15t^4 + 10t^3`, easing interpolation weights so the
/// field's derivative vanishes at lattice boundaries.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Picks one of 16 fixed gradient directions from the low hash bits and dots
/// it with the corner-local offset.
///
/// Rows `0xC` and `0xE` reorder x/y instead of mirroring the `0x8..0xB`
/// block, and `0xD`/`0xF` repeat `0x9`/`0xB`. Generated fields depend on this
/// exact mapping; do not normalize it to a canonical gradient set.
#[inline]
fn gradient(hash: u32, x: f32, y: f32, z: f32) -> f32 {
    match hash & 0xF {
        0x0 => x + y,
        0x1 => -x + y,
        0x2 => x - y,
        0x3 => -x - y,
        0x4 => x + z,
        0x5 => -x + z,
        0x6 => x - z,
        0x7 => -x - z,
        0x8 => y + z,
        0x9 => -y + z,
        0xA => y - z,
        0xB => -y - z,
        0xC => y + x,
        0xD => -y + z,
        0xE => y - x,
        0xF => -y - z,
        _ => unreachable!(),
    }
}

/// Hashes the eight corners of the lattice cell at `(x, y, z)`.
///
/// The far corner on each axis wraps to `(coord + 1) % tiles`; the near
/// corner is the coordinate itself, unwrapped. Each corner hash chains three
/// lookups, folding one coordinate per step. Additions wrap so negative
/// coordinates cast to `u32` behave like C unsigned arithmetic.
fn hash_cube(table: &PermutationTable, x: i32, y: i32, z: i32, tiles: UVec3) -> HashCube {
    let xi = (x.wrapping_add(1) as u32) % tiles.x;
    let yi = (y.wrapping_add(1) as u32) % tiles.y;
    let zi = (z.wrapping_add(1) as u32) % tiles.z;

    let x = x as u32;
    let y = y as u32;
    let z = z as u32;

    let chain = |a: u32, b: u32, c: u32| {
        table.hash(table.hash(table.hash(a).wrapping_add(b)).wrapping_add(c))
    };

    HashCube {
        aaa: chain(x, y, z),
        aab: chain(x, y, zi),
        aba: chain(x, yi, z),
        abb: chain(x, yi, zi),
        baa: chain(xi, y, z),
        bab: chain(xi, y, zi),
        bba: chain(xi, yi, z),
        bbb: chain(xi, yi, zi),
    }
}

/// Samples tileable gradient noise at `pos`, returning a value in `[0, 1]`.
///
/// The field repeats with period `tiles` on each axis. Periods below the
/// permutation size (256) are valid and simply repeat sooner.
///
/// # Errors
/// [`NoiseError::ZeroTilingPeriod`] if any component of `tiles` is zero.
pub fn sample_perlin(
    table: &PermutationTable,
    pos: Vec3,
    tiles: UVec3,
) -> Result<f32, NoiseError> {
    validate_tiles(tiles)?;

    let x = pos.x % tiles.x as f32;
    let y = pos.y % tiles.y as f32;
    let z = pos.z % tiles.z as f32;

    let xi = x.floor() as i32;
    let yi = y.floor() as i32;
    let zi = z.floor() as i32;

    let dx = x - xi as f32;
    let dy = y - yi as f32;
    let dz = z - zi as f32;

    let fx = fade(dx);
    let fy = fade(dy);
    let fz = fade(dz);

    let hash = hash_cube(table, xi, yi, zi, tiles);

    let x1 = lerp(
        gradient(hash.aaa, dx, dy, dz),
        gradient(hash.baa, dx - 1.0, dy, dz),
        fx,
    );
    let x2 = lerp(
        gradient(hash.aba, dx, dy - 1.0, dz),
        gradient(hash.bba, dx - 1.0, dy - 1.0, dz),
        fx,
    );
    let y1 = lerp(x1, x2, fy);

    let x1 = lerp(
        gradient(hash.aab, dx, dy, dz - 1.0),
        gradient(hash.bab, dx - 1.0, dy, dz - 1.0),
        fx,
    );
    let x2 = lerp(
        gradient(hash.abb, dx, dy - 1.0, dz - 1.0),
        gradient(hash.bbb, dx - 1.0, dy - 1.0, dz - 1.0),
        fx,
    );
    let y2 = lerp(x1, x2, fy);

    let value = lerp(y1, y2, fz);
    Ok((value + 1.0) / 2.0)
}

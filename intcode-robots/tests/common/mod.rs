//! Shared helpers for robot integration tests

use intcode_assembler::assemble;
use intcode_spec::Program;

/// Repair-droid program for a maze drawn as text
///
/// Rows run north to south. `#` wall, `.` open, `O` target, `D` droid start
/// (open). The border must be walls so the droid never leaves the grid.
pub fn droid_program(rows: &[&str]) -> Program {
    let height = rows.len();
    let width = rows[0].len();

    let mut tiles = vec![0; width * height];
    let mut start = (0, 0);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width, "ragged maze");
        let y = height - 1 - row;
        for (x, ch) in line.chars().enumerate() {
            tiles[y * width + x] = match ch {
                '#' => 0,
                '.' => 1,
                'O' => 2,
                'D' => {
                    start = (x, y);
                    1
                }
                other => panic!("unexpected maze character {other:?}"),
            };
        }
    }

    let grid: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
    let source = format!(
        r#"
        ; droid position lives in (px, py); tiles[y * width + x]
loop:   in cmd
        arb cmd
        add px, @dx, nx
        add py, @dy, ny
        mul cmd, #-1, tmp
        arb tmp
        mul ny, #{width}, idx
        add idx, nx, idx
        arb idx
        add @grid, #0, tile
        mul idx, #-1, tmp
        arb tmp
        out tile
        jf tile, #loop
        add nx, #0, px
        add ny, #0, py
        jt #1, #loop

cmd:    .data 0
px:     .data {px}
py:     .data {py}
nx:     .data 0
ny:     .data 0
idx:    .data 0
tmp:    .data 0
tile:   .data 0
dx:     .data 0, 0, 0, -1, 1
dy:     .data 0, 1, -1, 0, 0
grid:   .data {cells}
"#,
        px = start.0,
        py = start.1,
        cells = grid.join(", "),
    );

    assemble(&source).expect("droid program assembles")
}

/// Open 3x3 room with the droid in the middle and the target north-east
pub const SMALL_ROOM: [&str; 5] = [
    "#####",
    "#..O#",
    "#.D.#",
    "#...#",
    "#####",
];

/// Winding corridor with a dead end
pub const CORRIDOR: [&str; 5] = [
    "#######",
    "#D#..O#",
    "#.#.###",
    "#.....#",
    "#######",
];

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{shape_of, Board, GameLoop, Piece};
use tui_blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut game = GameLoop::with_seed(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.state().game_over() {
                game.reset();
            }
            black_box(game.tick());
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(15, 30);
            // Fill bottom 4 rows
            for row in 26..30 {
                for col in 0..15 {
                    board.set(col, row);
                }
            }
            let full = board.full_rows();
            black_box(board.clear_rows(&full));
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut game = GameLoop::with_seed(12345);

    c.bench_function("reset_and_spawn", |b| {
        b.iter(|| {
            black_box(game.reset());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let board = Board::new(15, 30);
    let piece = Piece::spawn(PieceKind::T, &board);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            let mut p = piece.clone();
            black_box(p.move_left(&board));
            black_box(p.move_right(&board));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new(15, 30);
    let matrix = shape_of(PieceKind::L);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            let mut p = Piece::with_matrix(PieceKind::L, matrix.clone(), 6, 10);
            black_box(p.rotate(&board));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new(15, 30);
    for col in 0..15 {
        board.set(col, 29);
    }
    let matrix = shape_of(PieceKind::LI);

    c.bench_function("collides", |b| {
        b.iter(|| black_box(Piece::collides(&board, &matrix, black_box(4), black_box(28))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_row_clear,
    bench_reset,
    bench_move,
    bench_rotate,
    bench_collides
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_tetris::core::{probe_descent, Board, Piece, Session, StepEvent};
use matrix_tetris::types::{Command, ShapeKind, MATRIX_COLS, MATRIX_ROWS};

fn bench_gravity_step(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.step_gravity();

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if session.step_gravity() == StepEvent::Idle {
                session.apply(Command::Restart);
            }
        })
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_2_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for col in 0..MATRIX_COLS {
                board.set_cell(col, MATRIX_ROWS - 1);
                board.set_cell(col, MATRIX_ROWS - 2);
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_probe_descent(c: &mut Criterion) {
    let board = Board::new();
    let piece = Piece::spawn(&board, ShapeKind::S).unwrap();

    c.bench_function("probe_descent", |b| {
        b.iter(|| probe_descent(black_box(&board), black_box(&piece)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut board = Board::new();
    for col in 0..MATRIX_COLS {
        board.set_cell(col, MATRIX_ROWS - 1);
    }

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut piece = Piece::spawn(black_box(&board), ShapeKind::L).unwrap();
            black_box(piece.hard_drop(&board))
        })
    });
}

fn bench_compose_frame(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.step_gravity();
    let mut frame = [0u32; MATRIX_COLS];

    c.bench_function("compose_frame", |b| {
        b.iter(|| {
            session.compose(black_box(&mut frame));
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_clear_full_rows,
    bench_probe_descent,
    bench_hard_drop,
    bench_compose_frame
);
criterion_main!(benches);

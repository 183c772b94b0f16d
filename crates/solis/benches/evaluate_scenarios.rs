use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use solis::{force, Interpreter, Lexer, Parser};

/// Parses and evaluates `source` as a module defining `main`, asserting the
/// expected integer once before the timed loop so a regression in the
/// evaluator itself fails loudly instead of quietly benchmarking garbage.
fn run_scenario(bench: &mut Bencher, source: &str, expected: i64) {
    let build = || {
        let tokens = Lexer::new(source).tokenize();
        let mut parser = Parser::new(tokens);
        let module = parser.parse_module();
        let mut interpreter = Interpreter::new();
        interpreter.eval_module(module).unwrap();
        interpreter
    };

    let interpreter = build();
    let main = interpreter.get_binding("main").expect("scenario defines `main`");
    let result = force(&main).unwrap();
    let solis::Value::Int(n) = &*result else { panic!("expected Int result") };
    assert_eq!(*n, expected);

    bench.iter(|| {
        let interpreter = build();
        let main = interpreter.get_binding("main").expect("scenario defines `main`");
        let result = force(&main).unwrap();
        black_box(result);
    });
}

/// Recursive, non-tail-call factorial: exercises closures, `App`, and `if`.
const FACTORIAL_10: &str = "
let fact = \\n -> if n <= 1 then 1 else n * fact (n - 1)
let main = fact 10
";

/// `map`/`filter`/`foldl` composed over a 200-element recursively built
/// list: exercises thunk allocation and forcing at list-building scale.
const MAP_FILTER_FOLD_200: &str = "
let build = \\n -> if n == 0 then [] else n :: build (n - 1)
let xs = build 200
let main = foldl (\\acc -> \\x -> acc + x) 0 (filter (\\x -> x > 50) (map (\\x -> x * 2) xs))
";

/// Mutual recursion, forcing the evaluator to chase through two closures
/// per step rather than one.
const MUTUAL_RECURSION_IS_EVEN_200: &str = "
let is_even = \\n -> if n == 0 then true else is_odd (n - 1)
let is_odd = \\n -> if n == 0 then false else is_even (n - 1)
let main = if is_even 200 then 1 else 0
";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("factorial_10", |b| run_scenario(b, FACTORIAL_10, 3628800));
    c.bench_function("map_filter_fold_200", |b| run_scenario(b, MAP_FILTER_FOLD_200, {
        // sum of 2*x for x in 51..=200, i.e. 2 * sum(51..=200)
        let n: i64 = (51..=200).sum();
        2 * n
    }));
    c.bench_function("mutual_recursion_is_even_200", |b| run_scenario(b, MUTUAL_RECURSION_IS_EVEN_200, 1));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

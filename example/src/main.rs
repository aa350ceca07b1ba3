use rowmat::{mat, ops, GemmMode, Matrix, OpsConfig, RowMatrix, RowMatrixOperations};

fn main() {
    let a = mat![[1.0, 2.0], [3.0, 4.0]];
    let b = mat![[5.0, 6.0], [7.0, 8.0]];

    let sum = ops::add(a.clone(), b.clone()).unwrap();
    println!("a + b:\n{:?}", sum);

    let prod = ops::multiply(a.clone(), b.clone()).unwrap();
    println!("a * b:\n{:?}", prod);

    let mut c = RowMatrix::<f64>::new(2, 2);
    c.import(&[1.0, 1.0, 1.0, 1.0]).unwrap();
    let gemm = ops::gemm(a.clone(), b.clone(), c.clone()).unwrap();
    println!("a * b + c:\n{:?}", gemm);

    let faithful =
        RowMatrixOperations::new(OpsConfig::default().with_gemm_mode(GemmMode::Faithful));
    let zeros = faithful.gemm_matrices(Some(a), Some(b), Some(c));
    println!("faithful gemm:\n{:?}", zeros);

    let wide = RowMatrix::<f64>::new(2, 3);
    let bad = ops::multiply(wide, mat![[1.0, 0.0], [0.0, 1.0]]);
    match bad {
        Ok(m) => println!("unexpected {:?}", m),
        Err(e) => println!("rejected: {}", e),
    }
}

use densemat::config::{MatrixConfig, Shape};
use densemat::math::DenseMatrix;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("DENSEMAT_LOG", "info,densemat=trace"))
        .init();

    let shape: Shape = "3x3"
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let mut m: DenseMatrix<i32> = MatrixConfig::new(shape)
        .with_values((0..9).collect())
        .build();
    println!("start:            {}", m);

    for (point, value) in m.indexed_iter().filter(|(p, _)| p.row == p.column) {
        println!("diagonal {} = {}", point, value);
    }

    m.remove_column(1)?;
    println!("remove column 1:  {}", m);

    m.remove_row(1)?;
    println!("remove row 1:     {}", m);

    m.insert_columns(1, 2, -1)?;
    println!("insert 2 columns: {}", m);

    {
        let mut cursor = m.begin_mut();
        while cursor.is_dereferenceable() {
            if cursor.column() == 0 {
                *cursor *= 10;
            }
            cursor += 1;
        }
    }
    println!("scale column 0:   {}", m);

    if let Err(err) = m.at((5, 0)) {
        println!("expected failure: {}", err);
    }

    m.remove_columns(0, m.columns())?;
    println!("remove all:       {} shape={:?}", m, m.shape());
    Ok(())
}

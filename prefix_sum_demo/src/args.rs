use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Comma separated initial values of the tree.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [1, 6, 2, 4, 3, 5]
    )]
    pub values: Vec<i64>,

    /// Build the tree from this many random values instead of `--values`.
    #[arg(long, required = false)]
    pub random_len: Option<usize>,

    /// Seed for `--random-len`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Inclusive range whose sum is queried before and after the update.
    #[arg(short, long, num_args = 2, value_names = ["START", "END"], default_values_t = [3, 4])]
    pub query: Vec<usize>,

    /// Inclusive range the update is applied to.
    #[arg(short, long, num_args = 2, value_names = ["START", "END"], default_values_t = [3, 3])]
    pub update: Vec<usize>,

    /// Amount added to every element of the updated range.
    #[arg(short, long, allow_negative_numbers = true, default_value_t = -1)]
    pub delta: i64,
}

impl Args {
    pub fn query_range(&self) -> (usize, usize) {
        (self.query[0], self.query[1])
    }

    pub fn update_range(&self) -> (usize, usize) {
        (self.update[0], self.update[1])
    }
}

/// dense row-major table for the dynamic programming metrics
pub(crate) struct Matrix<T> {
    cols: usize,
    cells: Vec<T>,
}

impl<T> Matrix<T>
where
    T: Copy + Default,
{
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: T) {
        debug_assert!(col < self.cols);
        self.cells[row * self.cols + col] = val;
    }
}

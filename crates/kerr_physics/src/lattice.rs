/// `n` evenly spaced samples from `start` to `end`, both inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_inclusive() {
        let v = linspace(1.1, 9.0, 15);
        assert_eq!(v.len(), 15);
        assert_eq!(v[0], 1.1);
        assert_eq!(v[14], 9.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }
}

use approx::assert_relative_eq;
use pblite_filters::{
    derivative_gaussian_filter, dog_filter_bank, gabor_filter_bank, gaussian_filter,
    lm_filter_bank, DerivativeOrder, DogParams, Elongation, FilterBankError, GaborParams,
    LmParams, LmVariant,
};
use pblite_imgproc::{interpolation::InterpolationMode, warp::rotate_about_center};
use pblite_kernel::MeshGrid;

#[test]
fn gaussian_mass_on_49x49() -> Result<(), FilterBankError> {
    let grid = MeshGrid::centered(49)?;
    for sigma in [1.0f32, 1.5, 2.5, 4.0] {
        let g = gaussian_filter(&grid, sigma, 1.0, Elongation::Isotropic)?;
        assert_relative_eq!(g.sum(), 1.0, epsilon = 1e-2);
    }
    Ok(())
}

#[test]
fn gaussian_is_symmetric_under_negation() -> Result<(), FilterBankError> {
    let grid = MeshGrid::centered(49)?;
    let n = grid.size();
    let g = gaussian_filter(&grid, 2.0, 3.0, Elongation::Elongated)?;
    for r in 0..n {
        for c in 0..n {
            assert_eq!(g.get_unchecked(r, c), g.get_unchecked(n - 1 - r, n - 1 - c));
        }
    }
    Ok(())
}

#[test]
fn first_x_derivative_is_odd() -> Result<(), FilterBankError> {
    let grid = MeshGrid::centered(49)?;
    let n = grid.size();
    let d = derivative_gaussian_filter(
        &grid,
        2.0,
        3.0,
        DerivativeOrder::FirstX,
        Elongation::Elongated,
    )?;
    for r in 0..n {
        for c in 0..n {
            assert_eq!(d.get_unchecked(r, c), -d.get_unchecked(r, n - 1 - c));
        }
    }
    Ok(())
}

#[test]
fn unsupported_derivative_order_is_an_invalid_argument() {
    let err = DerivativeOrder::try_from([1u8, 1u8]).unwrap_err();
    assert_eq!(err, FilterBankError::UnsupportedDerivativeOrder(1, 1));
    assert!(err.is_invalid_argument());
}

#[test]
fn bank_sizes() -> Result<(), FilterBankError> {
    let dog = dog_filter_bank()?;
    assert_eq!(dog.len(), 32);
    assert!(dog.iter().all(|k| k.rows() == 7 && k.cols() == 7));

    let small = lm_filter_bank(LmVariant::Small)?;
    let large = lm_filter_bank(LmVariant::from_name_lenient("anything else"))?;
    assert_eq!(small.len(), 48);
    assert_eq!(large.len(), 48);
    assert!(small.iter().chain(large.iter()).all(|k| k.rows() == 49 && k.cols() == 49));
    assert_ne!(small, large);

    let gabor = gabor_filter_bank(8, 8.0, 0.65, 0.0)?;
    assert_eq!(gabor.len(), 40);
    assert!(gabor.iter().all(|k| k.rows() == 49 && k.cols() == 49));
    Ok(())
}

#[test]
fn full_revolution_reproduces_the_kernel() -> Result<(), FilterBankError> {
    let dog = dog_filter_bank()?;
    let lm = lm_filter_bank(LmVariant::Small)?;
    for kernel in [&dog[0], &dog[16], &lm[0], &lm[18]] {
        let rotated = rotate_about_center(kernel, 360.0, InterpolationMode::Bilinear);
        assert!(rotated.max_abs_diff(kernel)? < 1e-5);
    }
    Ok(())
}

#[test]
fn dog_orientations_rotate_the_response() -> Result<(), FilterBankError> {
    let dog = dog_filter_bank()?;
    // a quarter turn (orientation 4 of 16) moves the lobes from the x axis to the y axis
    let k0 = &dog[0];
    let k4 = &dog[4];
    assert!(k0.get_unchecked(3, 4).abs() > 10.0 * k0.get_unchecked(4, 3).abs());
    assert!(k4.get_unchecked(4, 3).abs() > 10.0 * k4.get_unchecked(3, 4).abs());
    Ok(())
}

#[test]
fn params_deserialize_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dog: DogParams = serde_json::from_str(r#"{ "orientations": 8 }"#)?;
    assert_eq!(dog.orientations, 8);
    assert_eq!(dog.size, DogParams::default().size);

    let lm: LmParams = serde_json::from_str("{}")?;
    assert_eq!(lm, LmParams::default());

    let gabor: GaborParams = serde_json::from_str(r#"{ "sigma": 4.0, "psi": 1.5 }"#)?;
    assert_eq!(gabor.sigma, 4.0);
    assert_eq!(gabor.wavelengths, vec![2.0, 5.0, 10.0, 15.0, 20.0]);

    assert!(serde_json::from_str::<GaborParams>(r#"{ "lambda": 3.0 }"#).is_err());

    let variant: LmVariant = serde_json::from_str(r#""small""#)?;
    assert_eq!(variant, LmVariant::Small);
    Ok(())
}

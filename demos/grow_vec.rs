use grow_vec::{compare, GrowVec, VecError};

fn main() -> Result<(), VecError> {
    let mut v = GrowVec::<i64>::with_capacity(4)?;

    for i in 1..=10 {
        v.push(i)?;
        println!("pushed {i:>2}: len {:>2}, capacity {:>2}", v.len(), v.capacity());
    }

    println!("Vector: {:?}", v);
    println!("Sum: {}", v.iter().sum::<i64>());

    v.insert(0, 99)?;
    v.splice(1, 2)?;
    println!("After insert and splice: {:?}", v);

    v.sort_with(compare::i64_descending);
    println!("Descending: {:?}", v);

    v.retain(|x| *x % 2 == 0);
    println!("Even numbers: {:?}", v);

    let backwards: Vec<i64> = v.backward(v.len() - 1, v.len()).copied().collect();
    println!("Backwards: {:?}", backwards);

    v.shrink_to_fit()?;
    println!("Shrunk to capacity {}", v.capacity());
    Ok(())
}

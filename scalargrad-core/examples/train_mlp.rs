//! # Exemple d'Entraînement d'un MLP Scalaire
//!
//! Cet exemple illustre les étapes fondamentales pour entraîner un petit réseau de neurones
//! (Multi-Layer Perceptron) en utilisant `scalargrad-core`.
//!
//! ## Fonctionnalités Démontrées:
//! 1.  **Construction du Graphe**: chaque scalaire est un nœud d'une arène (`Graph`),
//!     manipulé à travers des poignées `Value` copiables.
//! 2.  **Instanciation du Modèle** (`Mlp`): couches denses avec activation `tanh`
//!     et initialisation uniforme des poids.
//! 3.  **Calcul de la Perte** (`MseLoss` avec réduction `Sum`).
//! 4.  **Passe Arrière** (`backward`) pour calculer les gradients par rétropropagation.
//! 5.  **Mise à Jour des Poids** via l'optimiseur `Sgd`.
//! 6.  **Mécanisme `zero_grad`**: remise à zéro des gradients entre les itérations.
//!
//! ## Exécution
//! Pour exécuter cet exemple, utilisez la commande :
//! `cargo run --example train_mlp`

use scalargrad_core::nn::{Activation, Init, Mlp, Module, MseLoss, Reduction};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    // Jeu de données jouet: quatre échantillons de dimension 3, cibles ±1.
    let xs: [[f64; 3]; 4] = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

    let graph = Graph::new();
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], Activation::Tanh, &Init::default());
    println!(
        "MLP créé avec succès: {} couches, {} paramètres.",
        mlp.num_layers(),
        mlp.parameters().len()
    );

    let loss_fn = MseLoss::new(Reduction::Sum);
    let mut optimizer = Sgd::new(mlp.parameters(), 0.05, 0.0);

    let num_epochs = 50;
    println!("\nDébut de la boucle d'entraînement...");

    for epoch in 0..num_epochs {
        // --- Passe Avant ---
        let mut predictions = Vec::with_capacity(xs.len());
        let mut targets = Vec::with_capacity(ys.len());
        for (sample, target) in xs.iter().zip(ys.iter()) {
            let inputs: Vec<_> = sample.iter().map(|&x| graph.leaf(x)).collect();
            predictions.push(mlp.forward_scalar(&inputs)?);
            targets.push(graph.leaf(*target));
        }

        // --- Calcul de la Perte ---
        let loss = loss_fn.calculate(&predictions, &targets)?;

        // --- Passe Arrière ---
        optimizer.zero_grad();
        loss.backward();

        // --- Mise à Jour des Poids ---
        optimizer.step()?;

        println!("Epoch: {}, Loss: {}", epoch, loss.data());
    }

    println!("Boucle d'entraînement terminée.\n");

    // Prédictions finales sur le jeu de données.
    for (sample, target) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<_> = sample.iter().map(|&x| graph.leaf(x)).collect();
        let prediction = mlp.forward_scalar(&inputs)?;
        println!(
            "Entrée: {:?} -> prédiction: {:.4} (cible: {})",
            sample,
            prediction.data(),
            target
        );
    }

    Ok(())
}
